use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user comment attached to a span of document text.
///
/// The span is identified by its literal text. An annotation is consumed
/// when a revision is requested for a selection that contains `span_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Annotation {
    pub span_text: String,
    pub comment: String,
}

impl Annotation {
    pub fn new(span_text: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            span_text: span_text.into(),
            comment: comment.into(),
        }
    }

    /// Whether this annotation falls inside the given selection.
    pub fn is_within(&self, selected_text: &str) -> bool {
        selected_text.contains(self.span_text.as_str())
    }
}
