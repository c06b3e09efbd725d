use thiserror::Error;

/// Client errors. The `Display` text of the submission errors is exactly the
/// notice shown to the user.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with an `error` field.
    #[error("Error: {0}")]
    Backend(String),

    /// Network failure or a body that is not a valid reply.
    #[error("Error {verb} password: {message}")]
    Transport { verb: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ClientError {
    /// Submission errors have already been shown through the view.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::Backend(_) | ClientError::Transport { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
