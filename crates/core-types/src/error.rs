use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// One or more required fields were missing from a request payload.
    /// `errores` lists every violation found, `message` summarises them.
    #[error("{message}")]
    Validation {
        message: String,
        errores: Vec<String>,
    },

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl CoreError {
    /// A validation error carrying a single violation.
    pub fn missing(message: impl Into<String>) -> Self {
        let message = message.into();
        CoreError::Validation {
            errores: vec![message.clone()],
            message,
        }
    }
}
