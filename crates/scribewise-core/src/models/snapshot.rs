use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One immutable version of the full document content.
///
/// `content` is serialized rich text (HTML fragments such as `<mark>` are
/// allowed). Snapshots are owned by the editor's history log and are never
/// edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentSnapshot {
    pub id: Uuid,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

impl DocumentSnapshot {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}
