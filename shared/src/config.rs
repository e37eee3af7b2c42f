use serde::{Deserialize, Serialize};

/// Where the prediction service lives and how the client paces itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service origin; empty means same origin as the page.
    pub api_base: String,
    pub status_path: String,
    pub predict_path: String,
    /// Multipart field the service reads the image from.
    pub upload_field: String,
    pub status_poll_interval_ms: u32,
    pub progress_hide_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_path: "/".to_string(),
            predict_path: "/predict".to_string(),
            upload_field: "file".to_string(),
            status_poll_interval_ms: 15_000,
            progress_hide_delay_ms: 1_500,
        }
    }
}

impl ClientConfig {
    /// Defaults, with `api_base` taken from `DIAGNOSIS_API_BASE` when it was
    /// set at build time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("DIAGNOSIS_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            log::info!("Using prediction service at {}", base);
            config.api_base = base.to_string();
        }
        config
    }

    pub fn status_url(&self) -> String {
        self.endpoint(&self.status_path)
    }

    pub fn predict_url(&self) -> String {
        self.endpoint(&self.predict_path)
    }

    /// Joins `api_base` and `path` with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
