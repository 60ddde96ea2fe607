use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An accepted model revision of a selected span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Revision {
    pub id: Uuid,
    pub original_text: String,
    pub revised_text: String,
    pub explanation: String,
    pub timestamp: jiff::Timestamp,
}

impl Revision {
    /// Case-insensitive substring match over the original text, the revised
    /// text and the explanation. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.original_text.to_lowercase().contains(&needle)
            || self.revised_text.to_lowercase().contains(&needle)
            || self.explanation.to_lowercase().contains(&needle)
    }
}

/// A revision together with the model's opinion on whether the supplied
/// annotations should shape it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RevisionOutcome {
    pub revision: Revision,
    pub consider_annotations: bool,
}
