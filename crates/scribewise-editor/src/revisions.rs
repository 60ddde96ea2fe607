use scribewise_core::models::revision::Revision;
use uuid::Uuid;

/// Accepted revisions, most recent first. Independent of undo/redo: undoing
/// a revision's commit does not remove it from here.
#[derive(Debug, Clone, Default)]
pub struct RevisionLedger {
    revisions: Vec<Revision>,
}

impl RevisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, revision: Revision) {
        self.revisions.insert(0, revision);
    }

    pub fn get(&self, id: Uuid) -> Option<&Revision> {
        self.revisions.iter().find(|r| r.id == id)
    }

    /// Revisions matching `term` (case-insensitive) in their original text,
    /// revised text or explanation, keeping most-recent-first order.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Revision> + 'a {
        self.revisions.iter().filter(move |r| r.matches(term))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Revision> {
        self.revisions.iter()
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}
