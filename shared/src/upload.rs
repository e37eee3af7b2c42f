use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("\"{name}\" is not an image ({content_type}). Please choose an image file.")]
    NotAnImage { name: String, content_type: String },
}

/// Accepts a candidate file only when the browser reports an `image/*`
/// content type.
pub fn validate_candidate(name: &str, content_type: &str) -> Result<(), UploadError> {
    if content_type.to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        let content_type = if content_type.is_empty() {
            "unknown type".to_string()
        } else {
            content_type.to_string()
        };
        Err(UploadError::NotAnImage { name: name.to_string(), content_type })
    }
}
