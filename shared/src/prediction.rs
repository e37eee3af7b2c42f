use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label the prediction service returns for a scan without a tumor.
pub const NO_TUMOR_LABEL: &str = "no_tumor";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryScore {
    pub label: String,
    pub confidence: f64,
}

/// Body of a successful `POST /predict`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub predicted_label: String,
    pub confidence: f64,
    #[serde(default)]
    pub raw_predictions: Vec<CategoryScore>,
}

impl PredictionResult {
    pub fn is_negative(&self) -> bool {
        self.predicted_label == NO_TUMOR_LABEL
    }
}

/// Error body the prediction service sends along with a 4xx/5xx status.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceError {
    pub error: String,
}

/// Tags one prediction request. A response is only applied while its id is
/// still the session's in-flight id.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a category label such as `glioma_tumor` into `Glioma Tumor`.
pub fn humanize_label(label: &str) -> String {
    label
        .split(|c: char| c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_response() {
        let body = r#"{
            "predicted_label": "glioma_tumor",
            "confidence": 61.2,
            "raw_predictions": [
                {"label": "glioma_tumor", "confidence": 61.2},
                {"label": "meningioma_tumor", "confidence": 8.3},
                {"label": "no_tumor", "confidence": 30.5},
                {"label": "pituitary_tumor", "confidence": 0.0}
            ]
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.predicted_label, "glioma_tumor");
        assert_eq!(result.confidence, 61.2);
        assert_eq!(result.raw_predictions.len(), 4);
        assert_eq!(result.raw_predictions[2].label, "no_tumor");
        assert!(!result.is_negative());
    }

    #[test]
    fn test_missing_raw_predictions_defaults_to_empty() {
        let body = r#"{"predicted_label": "no_tumor", "confidence": 97.5}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert!(result.raw_predictions.is_empty());
        assert!(result.is_negative());
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let body = r#"{"confidence": 97.5, "raw_predictions": []}"#;
        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }

    #[test]
    fn test_parse_service_error() {
        let body = r#"{"error": "No file uploaded."}"#;
        let err: ServiceError = serde_json::from_str(body).unwrap();
        assert_eq!(err.error, "No file uploaded.");
    }

    #[test]
    fn test_humanize_label() {
        assert_eq!(humanize_label("glioma_tumor"), "Glioma Tumor");
        assert_eq!(humanize_label("no_tumor"), "No Tumor");
        assert_eq!(humanize_label("meningioma"), "Meningioma");
        assert_eq!(humanize_label("__odd__label"), "Odd Label");
        assert_eq!(humanize_label(""), "");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36);
    }
}
