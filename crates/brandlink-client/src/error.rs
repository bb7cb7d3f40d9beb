use brandlink_core::CoreError;
use thiserror::Error;

/// Every failure a service call can produce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A client-side gate rejected the input before any request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// Text suitable for an error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Validation(message) => message.clone(),
            Self::Http(e) if e.is_timeout() => "The request timed out. Please try again.".into(),
            Self::Http(e) if e.is_connect() => {
                "Unable to reach the server. Check your connection.".into()
            }
            Self::Http(e) => format!("Network error: {e}"),
            Self::Deserialize { .. } => "The server sent an unexpected response.".into(),
            Self::InvalidBaseUrl { url, .. } => format!("The API address '{url}' is not valid."),
        }
    }

    /// HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
