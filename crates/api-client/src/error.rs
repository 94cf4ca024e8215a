use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach the API: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx answer. `message` is the API's own message when the body
    /// carried one, otherwise `HTTP error! status: <code>`.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(status: u16, api_message: Option<String>) -> Self {
        let message = api_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        ApiError::Status { status, message }
    }

    /// True for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
