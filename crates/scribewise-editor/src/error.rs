use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no text is selected")]
    EmptySelection,

    #[error("annotation comment is empty")]
    EmptyComment,

    #[error("a revision request is already in flight")]
    RevisionInFlight,

    #[error("revision ticket {0} does not match the pending request")]
    StaleTicket(Uuid),

    #[error("revision not found: {0}")]
    RevisionNotFound(Uuid),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
