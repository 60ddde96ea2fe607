use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::style::WritingStyle;

/// An entry in the locally persisted session index.
///
/// Carries no document content; only enough to list recent sessions and
/// restore the writing style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    pub id: Uuid,
    pub date: jiff::Timestamp,
    pub writing_style: WritingStyle,
}

impl SessionRecord {
    pub fn new(writing_style: WritingStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: jiff::Timestamp::now(),
            writing_style,
        }
    }
}
