use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Gemini API key is required")]
    MissingCredential,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Another request is still pending")]
    Busy,

    #[error("Unknown conversation: {0}")]
    UnknownConversation(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Identity error: {0}")]
    Identity(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl AppError {
    /// Text suitable for a user-facing notification, without the
    /// category prefix of `Display`.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(m)
            | AppError::Generation(m)
            | AppError::Extraction(m)
            | AppError::Identity(m)
            | AppError::Network(m)
            | AppError::Other(m) => m.clone(),
            other => other.to_string(),
        }
    }
}
