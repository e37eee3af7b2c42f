//! UI session state.
//!
//! A [`Session`] is an immutable snapshot of everything the controller
//! knows: the selected file, the service readiness, the in-flight request,
//! the cached result and the active tab. The component replaces its
//! snapshot with `session.apply(event)` for every [`SessionEvent`].

use std::rc::Rc;

use crate::prediction::{PredictionResult, RequestId};
use crate::report::{ReportTab, ReportView};
use crate::status::{ServiceStatus, StatusOutcome};
use crate::upload::UploadError;

/// Progress shown while a request is in flight. The UI has no real upload
/// progress, only this value.
pub const SYNTHETIC_PROGRESS: u8 = 60;

pub const ANALYZE_LABEL: &str = "Analyze Scan";
pub const ANALYZING_LABEL: &str = "Analyzing...";

#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Loading,
    Ready(String),
    Unavailable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    /// Increases with every accepted file, so late preview decodes can be
    /// matched to the file they were started for.
    pub id: u64,
    pub name: String,
    pub file: F,
    pub preview: Preview,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub request: RequestId,
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    AwaitingUpload,
    ReadyForAnalysis,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Placeholder::AwaitingUpload => "Upload an MRI scan to begin",
            Placeholder::ReadyForAnalysis => "Ready for analysis",
        }
    }
}

/// What the report area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportPanel {
    Placeholder(Placeholder),
    Analyzing,
    Failed(String),
    Report(ReportView),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent<F> {
    FileAccepted { name: String, file: F },
    FileRejected(UploadError),
    PreviewDecoded { selection: u64, data_url: String },
    PreviewFailed { selection: u64 },
    StatusChecked(StatusOutcome),
    AnalysisStarted(RequestId),
    PredictionSucceeded { request: RequestId, result: PredictionResult },
    PredictionFailed { request: RequestId, message: String },
    ProgressElapsed(RequestId),
    TabSelected(ReportTab),
    Reset,
}

#[derive(Clone, Debug)]
pub struct Session<F> {
    file: Option<SelectedFile<F>>,
    next_selection: u64,
    status: ServiceStatus,
    in_flight: Option<RequestId>,
    progress: Option<Progress>,
    result: Option<Rc<PredictionResult>>,
    active_tab: ReportTab,
    upload_error: Option<String>,
    report_error: Option<String>,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            file: None,
            next_selection: 0,
            status: ServiceStatus::default(),
            in_flight: None,
            progress: None,
            result: None,
            active_tab: ReportTab::default(),
            upload_error: None,
            report_error: None,
        }
    }
}

impl<F: Clone> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot that follows `event`. Events that do not apply
    /// to the current state (a stale response, a tab switch without a
    /// result, analyze while disabled) leave the snapshot unchanged.
    pub fn apply(&self, event: SessionEvent<F>) -> Self {
        let mut next = self.clone();
        next.transition(event);
        next
    }

    fn transition(&mut self, event: SessionEvent<F>) {
        match event {
            SessionEvent::FileAccepted { name, file } => {
                let id = self.next_selection;
                self.next_selection += 1;
                self.clear_report();
                self.upload_error = None;
                self.file = Some(SelectedFile { id, name, file, preview: Preview::Loading });
            }
            SessionEvent::FileRejected(err) => {
                self.clear_report();
                self.file = None;
                self.upload_error = Some(err.to_string());
            }
            SessionEvent::PreviewDecoded { selection, data_url } => {
                self.set_preview(selection, Preview::Ready(data_url));
            }
            SessionEvent::PreviewFailed { selection } => {
                self.set_preview(selection, Preview::Unavailable);
            }
            SessionEvent::StatusChecked(outcome) => {
                self.status = ServiceStatus::from(outcome);
            }
            SessionEvent::AnalysisStarted(request) => {
                if !self.can_analyze() {
                    log::warn!("Analyze requested while disabled, ignoring");
                    return;
                }
                self.clear_report();
                self.upload_error = None;
                self.in_flight = Some(request);
                self.progress = Some(Progress { request, percent: SYNTHETIC_PROGRESS });
            }
            SessionEvent::PredictionSucceeded { request, result } => {
                if !self.finish(request) {
                    return;
                }
                self.result = Some(Rc::new(result));
                self.active_tab = ReportTab::Classification;
            }
            SessionEvent::PredictionFailed { request, message } => {
                if !self.finish(request) {
                    return;
                }
                self.report_error = Some(message);
            }
            SessionEvent::ProgressElapsed(request) => {
                if self.progress.is_some_and(|p| p.request == request) {
                    self.progress = None;
                }
            }
            SessionEvent::TabSelected(tab) => {
                if self.result.is_some() {
                    self.active_tab = tab;
                }
            }
            SessionEvent::Reset => {
                *self = Self {
                    status: self.status,
                    next_selection: self.next_selection,
                    ..Self::default()
                };
            }
        }
    }

    /// Completes the in-flight request if `request` is it.
    fn finish(&mut self, request: RequestId) -> bool {
        if self.in_flight != Some(request) {
            log::debug!("Dropping stale response for request {}", request);
            return false;
        }
        self.in_flight = None;
        self.progress = Some(Progress { request, percent: 100 });
        true
    }

    fn set_preview(&mut self, selection: u64, preview: Preview) {
        match self.file.as_mut() {
            Some(selected) if selected.id == selection => selected.preview = preview,
            _ => log::debug!("Dropping preview for replaced selection {}", selection),
        }
    }

    /// Drops the cached report and supersedes any in-flight request.
    fn clear_report(&mut self) {
        self.in_flight = None;
        self.progress = None;
        self.result = None;
        self.active_tab = ReportTab::default();
        self.report_error = None;
    }
}

impl<F> Session<F> {
    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.file.as_ref()
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && self.is_ready() && self.in_flight.is_none()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn progress(&self) -> Option<Progress> {
        self.progress
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_deref()
    }

    pub fn tabs_enabled(&self) -> bool {
        self.result.is_some()
    }

    pub fn active_tab(&self) -> ReportTab {
        self.active_tab
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    pub fn analyze_label(&self) -> &'static str {
        if self.in_flight.is_some() { ANALYZING_LABEL } else { ANALYZE_LABEL }
    }

    pub fn report(&self) -> ReportPanel {
        if let Some(view) = ReportView::render(self.active_tab, self.result()) {
            ReportPanel::Report(view)
        } else if self.in_flight.is_some() {
            ReportPanel::Analyzing
        } else if let Some(message) = &self.report_error {
            ReportPanel::Failed(message.clone())
        } else if self.file.is_some() {
            ReportPanel::Placeholder(Placeholder::ReadyForAnalysis)
        } else {
            ReportPanel::Placeholder(Placeholder::AwaitingUpload)
        }
    }
}
