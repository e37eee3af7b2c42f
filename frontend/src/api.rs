use crate::error::PredictError;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ClientConfig, PredictionResult, ServiceError, StatusOutcome};
use web_sys::FormData;

/// GETs the service root. Any answer counts as reachable; only a 2xx
/// counts as ready.
pub async fn check_status(config: &ClientConfig) -> StatusOutcome {
    match Request::get(&config.status_url()).send().await {
        Ok(resp) => {
            let outcome = StatusOutcome::from_http_status(resp.status());
            if outcome != StatusOutcome::Reachable {
                log::warn!("Status check answered {}", resp.status());
            }
            outcome
        }
        Err(err) => {
            log::warn!("Status check failed: {:?}", err);
            StatusOutcome::Unreachable
        }
    }
}

pub async fn submit_prediction(
    config: &ClientConfig,
    file: &GlooFile,
) -> Result<PredictionResult, PredictError> {
    let form_data = FormData::new().map_err(PredictError::form)?;
    let raw: &web_sys::File = file.as_ref();
    form_data
        .append_with_blob_and_filename(&config.upload_field, raw, &file.name())
        .map_err(PredictError::form)?;

    let response = Request::post(&config.predict_url()).body(form_data)?.send().await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PredictError::Status { status, detail: error_detail(&body) });
    }

    response.json::<PredictionResult>().await.map_err(PredictError::Decode)
}

/// Pulls the `error` field out of a failure body, falling back to the raw
/// text.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ServiceError>(body) {
        Ok(err) => err.error,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
