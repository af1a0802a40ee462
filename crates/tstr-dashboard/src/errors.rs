use tstr_core::errors::TstrError;

/// A poll that produced no data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    #[error("Backend returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Malformed payload from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = error.status() {
            FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            FetchError::Decode {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

impl TstrError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT_ERROR",
            FetchError::Timeout { .. } => "FETCH_TIMEOUT",
            FetchError::Status { .. } => "FETCH_BAD_STATUS",
            FetchError::Decode { .. } => "FETCH_DECODE_ERROR",
        }
    }
}
