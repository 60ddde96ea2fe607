use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown writing style: {0}")]
    UnknownStyle(String),
}
