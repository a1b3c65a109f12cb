use resqme_core::polyline::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrsError {
    #[error("API key contains characters that are not allowed in a header")]
    InvalidApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Provider rejected credentials: {status} - {message}")]
    Auth { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode route geometry: {0}")]
    Decode(#[from] DecodeError),
}

impl OrsError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, OrsError::Network(error) if error.is_timeout())
    }

    /// Only transport failures are worth retrying; everything else would fail
    /// the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, OrsError::Network(_))
    }
}
