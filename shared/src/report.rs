//! View models for the two result tabs.
//!
//! Rendering is a pure function of the active tab and the cached
//! [`PredictionResult`]; the frontend turns these values into markup.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::prediction::{PredictionResult, humanize_label};

#[derive(Display, EnumIter, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportTab {
    #[default]
    #[strum(serialize = "Classification")]
    Classification,
    #[strum(serialize = "Confidence")]
    Confidence,
}

impl ReportTab {
    pub fn all() -> impl Iterator<Item = ReportTab> {
        ReportTab::iter()
    }

    pub fn icon(self) -> &'static str {
        match self {
            ReportTab::Classification => "fa-solid fa-brain",
            ReportTab::Confidence => "fa-solid fa-chart-bar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finding {
    Negative,
    Positive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReport {
    pub finding: Finding,
    pub icon: &'static str,
    pub heading: &'static str,
    pub severity_class: &'static str,
    pub label: String,
    pub confidence: String,
    pub recommendation: &'static str,
}

impl ClassificationReport {
    pub fn from_result(result: &PredictionResult) -> Self {
        let label = humanize_label(&result.predicted_label);
        let confidence = format_percent(result.confidence);

        if result.is_negative() {
            Self {
                finding: Finding::Negative,
                icon: "fa-solid fa-circle-check",
                heading: "No Tumor Detected",
                severity_class: "severity-low",
                label,
                confidence,
                recommendation: "No abnormal mass was identified in this scan. Continue routine check-ups as advised by your physician.",
            }
        } else {
            Self {
                finding: Finding::Positive,
                icon: "fa-solid fa-triangle-exclamation",
                heading: "Tumor Detected",
                severity_class: "severity-high",
                label,
                confidence,
                recommendation: "Please consult a neurologist or radiologist for a confirmatory review of this scan.",
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceBar {
    pub label: String,
    pub confidence: f64,
    /// Bar width in percent, clamped to `0..=100`.
    pub width: f64,
    pub value: String,
    pub is_top: bool,
}

/// Per-category bars, highest confidence first.
pub fn confidence_bars(result: &PredictionResult) -> Vec<ConfidenceBar> {
    let mut scores: Vec<_> = result.raw_predictions.iter().collect();
    // stable: ties keep the service's order, NaN goes last
    scores.sort_by(|a, b| sort_key(b.confidence).total_cmp(&sort_key(a.confidence)));

    scores
        .into_iter()
        .enumerate()
        .map(|(rank, score)| ConfidenceBar {
            label: humanize_label(&score.label),
            confidence: score.confidence,
            width: clamp_percent(score.confidence),
            value: format_percent(score.confidence),
            is_top: rank == 0,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportView {
    Classification(ClassificationReport),
    Confidence(Vec<ConfidenceBar>),
}

impl ReportView {
    /// Renders `tab` from the cached result; nothing to show without one.
    pub fn render(tab: ReportTab, result: Option<&PredictionResult>) -> Option<Self> {
        let result = result?;
        Some(match tab {
            ReportTab::Classification => {
                ReportView::Classification(ClassificationReport::from_result(result))
            }
            ReportTab::Confidence => ReportView::Confidence(confidence_bars(result)),
        })
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn sort_key(value: f64) -> f64 {
    if value.is_nan() { f64::NEG_INFINITY } else { value }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::CategoryScore;

    fn result(label: &str, confidence: f64, raw: &[(&str, f64)]) -> PredictionResult {
        PredictionResult {
            predicted_label: label.to_string(),
            confidence,
            raw_predictions: raw
                .iter()
                .map(|(label, confidence)| CategoryScore {
                    label: label.to_string(),
                    confidence: *confidence,
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_tumor_renders_negative_finding() {
        let report = ClassificationReport::from_result(&result("no_tumor", 97.5, &[]));
        assert_eq!(report.finding, Finding::Negative);
        assert_eq!(report.heading, "No Tumor Detected");
        assert_eq!(report.severity_class, "severity-low");
        assert_eq!(report.label, "No Tumor");
        assert_eq!(report.confidence, "97.50%");
    }

    #[test]
    fn test_other_labels_render_positive_finding() {
        for label in ["glioma_tumor", "meningioma_tumor", "pituitary_tumor", "something_new", "No_Tumor"] {
            let report = ClassificationReport::from_result(&result(label, 55.0, &[]));
            assert_eq!(report.finding, Finding::Positive, "{label}");
            assert_eq!(report.severity_class, "severity-high");
            assert_eq!(report.heading, "Tumor Detected");
        }
    }

    #[test]
    fn test_confidence_bars_sorted_descending() {
        let result = result(
            "glioma",
            61.2,
            &[("no_tumor", 30.5), ("meningioma", 8.3), ("glioma", 61.2)],
        );
        let bars = confidence_bars(&result);

        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Glioma", "No Tumor", "Meningioma"]);
        assert!(bars[0].is_top);
        assert!(!bars[1].is_top);
        assert!(!bars[2].is_top);
        assert_eq!(bars[0].value, "61.20%");
        assert_eq!(bars[2].width, 8.3);
    }

    #[test]
    fn test_confidence_bars_ties_keep_service_order() {
        let result = result("a", 50.0, &[("a", 50.0), ("b", 50.0), ("c", 0.0)]);
        let bars = confidence_bars(&result);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(bars.iter().filter(|b| b.is_top).count(), 1);
    }

    #[test]
    fn test_bar_width_is_clamped() {
        let result = result("a", 100.0, &[("a", 140.0), ("b", -3.0), ("c", f64::NAN)]);
        let bars = confidence_bars(&result);
        let widths: Vec<_> = bars.iter().map(|b| b.width).collect();
        assert!(widths.iter().all(|w| (0.0..=100.0).contains(w)));
        assert_eq!(bars[0].width, 100.0);
        assert_eq!(bars[2].value, "NaN%");
    }

    #[test]
    fn test_empty_raw_predictions_render_no_bars() {
        assert!(confidence_bars(&result("no_tumor", 90.0, &[])).is_empty());
    }

    #[test]
    fn test_tab_order() {
        let tabs: Vec<_> = ReportTab::all().collect();
        assert_eq!(tabs, vec![ReportTab::Classification, ReportTab::Confidence]);
        assert_eq!(ReportTab::default(), ReportTab::Classification);
        assert_eq!(ReportTab::Confidence.to_string(), "Confidence");
    }

    #[test]
    fn test_render_without_result_is_none() {
        assert_eq!(ReportView::render(ReportTab::Classification, None), None);
        assert_eq!(ReportView::render(ReportTab::Confidence, None), None);
    }

    #[test]
    fn test_render_follows_tab() {
        let cached = result("glioma_tumor", 61.2, &[("glioma_tumor", 61.2)]);
        assert!(matches!(
            ReportView::render(ReportTab::Classification, Some(&cached)),
            Some(ReportView::Classification(_))
        ));
        assert!(matches!(
            ReportView::render(ReportTab::Confidence, Some(&cached)),
            Some(ReportView::Confidence(bars)) if bars.len() == 1
        ));
    }
}
