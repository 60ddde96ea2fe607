use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion endpoint not configured: {0}")]
    Config(String),

    #[error("completion request failed: {0}")]
    Transport(String),

    #[error("completion endpoint returned HTTP {0}")]
    Status(u16),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected template: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used by hosts when deciding what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Protocol,
}

impl CompletionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompletionError::Config(_) => ErrorKind::Configuration,
            CompletionError::Transport(_) | CompletionError::Status(_) => ErrorKind::Transport,
            CompletionError::ResponseParse(_)
            | CompletionError::SchemaViolation(_)
            | CompletionError::Serialization(_) => ErrorKind::Protocol,
        }
    }
}
