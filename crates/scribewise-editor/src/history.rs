//! Linear snapshot history with a cursor.
//!
//! The log is append-only except for redo truncation: committing while the
//! cursor is behind the tip drops every snapshot after the cursor.

use scribewise_core::models::snapshot::DocumentSnapshot;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<DocumentSnapshot>,
    cursor: usize,
}

impl History {
    /// Seed the history with a single initial snapshot.
    pub fn new(initial_content: impl Into<String>) -> Self {
        Self {
            snapshots: vec![DocumentSnapshot::new(initial_content)],
            cursor: 0,
        }
    }

    /// Append a snapshot after the cursor and move the cursor onto it.
    ///
    /// Identical content is not rejected here; callers skip no-op commits.
    pub fn commit(&mut self, content: impl Into<String>) -> &DocumentSnapshot {
        let dropped = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(DocumentSnapshot::new(content));
        self.cursor = self.snapshots.len() - 1;
        debug!(cursor = self.cursor, dropped, "snapshot committed");
        &self.snapshots[self.cursor]
    }

    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        true
    }

    pub fn current(&self) -> &DocumentSnapshot {
        &self.snapshots[self.cursor]
    }

    /// The newest snapshot in the log, regardless of the cursor.
    pub fn latest(&self) -> &DocumentSnapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the log is seeded on construction and never emptied.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[DocumentSnapshot] {
        &self.snapshots
    }
}
