pub mod config;
pub mod prediction;
pub mod report;
pub mod session;
pub mod status;
pub mod upload;

pub use config::ClientConfig;
pub use prediction::{CategoryScore, NO_TUMOR_LABEL, PredictionResult, RequestId, ServiceError};
pub use report::{ClassificationReport, ConfidenceBar, Finding, ReportTab, ReportView};
pub use session::{Placeholder, Preview, Progress, ReportPanel, SelectedFile, Session, SessionEvent};
pub use status::{ServiceStatus, StatusOutcome};
pub use upload::{UploadError, validate_candidate};
