use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Result of one reachability check against the service root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The service answered with a 2xx status.
    Reachable,
    /// The service answered, but not with a success status.
    Unavailable(u16),
    /// The request never got an answer.
    Unreachable,
}

impl StatusOutcome {
    pub fn from_http_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            StatusOutcome::Reachable
        } else {
            StatusOutcome::Unavailable(status)
        }
    }
}

#[derive(Display, EnumIter, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    #[strum(serialize = "Connecting...")]
    Connecting,
    #[strum(serialize = "Operational")]
    Operational,
    #[strum(serialize = "Model Unavailable")]
    ModelUnavailable,
}

impl ServiceStatus {
    pub fn is_ready(self) -> bool {
        self == ServiceStatus::Operational
    }

    /// CSS modifier for the status dot.
    pub fn css_class(self) -> &'static str {
        match self {
            ServiceStatus::Connecting => "status-connecting",
            ServiceStatus::Operational => "status-online",
            ServiceStatus::ModelUnavailable => "status-offline",
        }
    }
}

impl From<StatusOutcome> for ServiceStatus {
    fn from(outcome: StatusOutcome) -> Self {
        match outcome {
            StatusOutcome::Reachable => ServiceStatus::Operational,
            StatusOutcome::Unavailable(_) => ServiceStatus::ModelUnavailable,
            StatusOutcome::Unreachable => ServiceStatus::Connecting,
        }
    }
}
