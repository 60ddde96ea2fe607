//! The editor session: one document, its history, its ledgers, and the
//! revision request state machine.
//!
//! A revision request is split in two so the network call can happen
//! outside the session:
//!
//! 1. [`EditorSession::begin_revision`] captures the request-time document,
//!    selection, style and annotations into a [`RevisionTicket`] and moves
//!    the session to [`RevisionState::Requesting`].
//! 2. [`EditorSession::complete_revision`] or
//!    [`EditorSession::fail_revision`] resolves that ticket and returns the
//!    session to [`RevisionState::Idle`].
//!
//! Undo, redo, annotation and document loads stay available while a request
//! is pending. Completion is applied to whatever snapshot is current at the
//! time it resolves.

use jiff::Timestamp;
use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::revision::{Revision, RevisionOutcome};
use scribewise_core::models::snapshot::DocumentSnapshot;
use scribewise_core::models::style::WritingStyle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::annotations::AnnotationLedger;
use crate::error::EditorError;
use crate::highlight::{HighlightHandle, HighlightOverlay, REVISION_HIGHLIGHT_DECAY};
use crate::history::History;
use crate::locate;
use crate::markup::{self, DocumentStats};
use crate::revisions::RevisionLedger;
use crate::surface::{ClipboardSink, EditorSurface};

/// Seed document for a fresh session.
pub const SAMPLE_TEXT: &str = "Ladies and gentlemen, today we celebrate the extraordinary career of Andy Murray. Born in Glasgow in 1987, Murray's journey from a young boy in Dunblane to a tennis legend is truly remarkable. His resilience, exemplified by his comeback from hip surgery in 2019, is awe-inspiring. Murray's achievements span three Grand Slam titles, two Olympic gold medals, and the coveted world number one ranking. But beyond the statistics, it's his fighting spirit and dedication to the sport that define his legacy. Andy Murray has not just played tennis; he has shown what it means to be a champion, both on and off the court.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionState {
    Idle,
    Requesting { ticket_id: Uuid },
}

/// Request-time values for one revision request.
#[derive(Debug, Clone)]
pub struct RevisionTicket {
    pub id: Uuid,
    pub snapshot_id: Uuid,
    pub document: String,
    pub selected_text: String,
    /// The selection extended with the following word, for prompting.
    pub context: String,
    pub style: WritingStyle,
    pub annotations: Vec<Annotation>,
}

/// An accepted revision and the handle of its pending highlight. No
/// highlight is scheduled when the revision left the content unchanged.
#[derive(Debug, Clone)]
pub struct AppliedRevision {
    pub revision: Revision,
    pub highlight: Option<HighlightHandle>,
}

pub struct EditorSession {
    style: WritingStyle,
    history: History,
    annotations: AnnotationLedger,
    revisions: RevisionLedger,
    highlights: HighlightOverlay,
    selection: Option<String>,
    state: RevisionState,
}

impl EditorSession {
    pub fn new(style: WritingStyle, initial_content: impl Into<String>) -> Self {
        Self {
            style,
            history: History::new(initial_content),
            annotations: AnnotationLedger::new(),
            revisions: RevisionLedger::new(),
            highlights: HighlightOverlay::new(),
            selection: None,
            state: RevisionState::Idle,
        }
    }

    pub fn with_sample(style: WritingStyle) -> Self {
        Self::new(style, SAMPLE_TEXT)
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn style(&self) -> WritingStyle {
        self.style
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current(&self) -> &DocumentSnapshot {
        self.history.current()
    }

    pub fn annotations(&self) -> &AnnotationLedger {
        &self.annotations
    }

    pub fn revisions(&self) -> &RevisionLedger {
        &self.revisions
    }

    pub fn state(&self) -> RevisionState {
        self.state
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, RevisionState::Requesting { .. })
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    // ── Selection ───────────────────────────────────────────────────────────

    /// Record the live text selection. Blank text clears it.
    pub fn select(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.selection = None;
        } else {
            self.selection = Some(text);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ── Editing ─────────────────────────────────────────────────────────────

    /// Commit `content` unless it equals the current snapshot.
    fn commit_if_changed(&mut self, content: String) -> bool {
        if content == self.history.current().content {
            debug!("content unchanged, skipping commit");
            return false;
        }
        self.history.commit(content);
        true
    }

    /// Direct user input from the editing surface.
    pub fn input(&mut self, content: impl Into<String>) -> bool {
        self.commit_if_changed(content.into())
    }

    /// Replace the document with imported file contents.
    pub fn load_document(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        let len = content.len();
        let committed = self.commit_if_changed(content);
        if committed {
            info!(len, "document loaded");
        }
        committed
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    // ── Annotations ─────────────────────────────────────────────────────────

    /// Attach `comment` to the current selection. The first occurrence of
    /// the selected text gets an annotation marker in the same commit.
    pub fn annotate(&mut self, comment: impl Into<String>) -> Result<(), EditorError> {
        let comment = comment.into();
        let span_text = self.selection.clone().ok_or(EditorError::EmptySelection)?;
        if comment.trim().is_empty() {
            return Err(EditorError::EmptyComment);
        }

        let current = &self.history.current().content;
        match markup::replace_first(current, &span_text, &markup::annotation_marked(&span_text)) {
            Some(marked) => {
                self.history.commit(marked);
            }
            None => warn!(%span_text, "annotated text not found in document"),
        }

        self.annotations.add(Annotation::new(span_text, comment));
        self.selection = None;
        info!(count = self.annotations.len(), "annotation added");
        Ok(())
    }

    // ── Revisions ───────────────────────────────────────────────────────────

    pub fn begin_revision(&mut self) -> Result<RevisionTicket, EditorError> {
        if self.is_requesting() {
            return Err(EditorError::RevisionInFlight);
        }
        let selected_text = self.selection.clone().ok_or(EditorError::EmptySelection)?;

        let snapshot = self.history.current();
        let occurrences = locate::occurrences(&selected_text, &snapshot.content);
        if occurrences > 1 {
            warn!(occurrences, "selected text is ambiguous, the first occurrence will be revised");
        }

        let ticket = RevisionTicket {
            id: Uuid::new_v4(),
            snapshot_id: snapshot.id,
            document: snapshot.content.clone(),
            context: locate::locate(&selected_text, &snapshot.content),
            selected_text,
            style: self.style,
            annotations: self.annotations.as_slice().to_vec(),
        };

        self.state = RevisionState::Requesting { ticket_id: ticket.id };
        info!(ticket_id = %ticket.id, style = %self.style, "revision requested");
        Ok(ticket)
    }

    fn resolve(&mut self, ticket: &RevisionTicket) -> Result<(), EditorError> {
        match self.state {
            RevisionState::Requesting { ticket_id } if ticket_id == ticket.id => {
                self.state = RevisionState::Idle;
                Ok(())
            }
            _ => Err(EditorError::StaleTicket(ticket.id)),
        }
    }

    /// The request failed. Nothing is committed; the selection is kept so
    /// the user can retry.
    pub fn fail_revision(&mut self, ticket: &RevisionTicket) -> Result<(), EditorError> {
        self.resolve(ticket)?;
        warn!(ticket_id = %ticket.id, "revision failed");
        Ok(())
    }

    pub fn complete_revision(
        &mut self,
        ticket: &RevisionTicket,
        outcome: RevisionOutcome,
    ) -> Result<AppliedRevision, EditorError> {
        self.complete_revision_at(ticket, outcome, Timestamp::now())
    }

    /// Apply an accepted revision to the current snapshot:
    /// consumed annotation markers are stripped, the first occurrence of the
    /// selected text is replaced, and the result is committed once. The new
    /// snapshot gets a pending-revision highlight over the replaced range
    /// that decays after [`REVISION_HIGHLIGHT_DECAY`].
    pub fn complete_revision_at(
        &mut self,
        ticket: &RevisionTicket,
        outcome: RevisionOutcome,
        now: Timestamp,
    ) -> Result<AppliedRevision, EditorError> {
        self.resolve(ticket)?;
        let revision = outcome.revision;

        let consumed = self.annotations.consume_overlapping(&ticket.selected_text);
        let mut content = self.history.current().content.clone();
        for annotation in &consumed {
            content = markup::strip_annotation(&content, &annotation.span_text);
        }

        let mut placed = None;
        match markup::replace_first_span(&content, &ticket.selected_text, &revision.revised_text) {
            Some((revised, range)) => {
                content = revised;
                placed = Some(range);
            }
            None => warn!(ticket_id = %ticket.id, "selected text no longer present, revision not placed"),
        }

        let mut highlight = None;
        if self.commit_if_changed(content) {
            if let Some(range) = placed {
                let snapshot_id = self.history.current().id;
                highlight = Some(self.highlights.schedule(
                    snapshot_id,
                    range,
                    now,
                    REVISION_HIGHLIGHT_DECAY,
                ));
            }
        }

        info!(
            revision_id = %revision.id,
            consumed = consumed.len(),
            consider_annotations = outcome.consider_annotations,
            "revision accepted"
        );

        self.selection = None;
        self.revisions.record(revision.clone());
        Ok(AppliedRevision { revision, highlight })
    }

    /// Re-apply a revision from the ledger to the current content.
    /// Returns `false` when its original text is not present.
    pub fn apply_revision(&mut self, id: Uuid) -> Result<bool, EditorError> {
        let revision = self
            .revisions
            .get(id)
            .ok_or(EditorError::RevisionNotFound(id))?;
        let Some(content) = markup::replace_first(
            &self.history.current().content,
            &revision.original_text,
            &revision.revised_text,
        ) else {
            debug!(revision_id = %id, "original text not present");
            return Ok(false);
        };
        Ok(self.commit_if_changed(content))
    }

    // ── Highlights ──────────────────────────────────────────────────────────

    pub fn expire_highlights(&mut self, now: Timestamp) -> usize {
        self.highlights.expire(now)
    }

    pub fn cancel_highlight(&mut self, handle: HighlightHandle) -> bool {
        self.highlights.cancel(handle)
    }

    pub fn highlights(&self) -> &HighlightOverlay {
        &self.highlights
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    pub fn render(&self) -> String {
        self.render_at(Timestamp::now())
    }

    /// Current snapshot content with live revision highlights applied.
    pub fn render_at(&self, now: Timestamp) -> String {
        self.highlights.render(self.history.current(), now).into_owned()
    }

    /// Push the rendered content to the surface, only if it differs from
    /// what the surface shows. Returns whether a write happened.
    pub fn sync_surface(&self, surface: &mut dyn EditorSurface) -> bool {
        self.sync_surface_at(surface, Timestamp::now())
    }

    pub fn sync_surface_at(&self, surface: &mut dyn EditorSurface, now: Timestamp) -> bool {
        let rendered = self.render_at(now);
        if surface.content() == rendered {
            return false;
        }
        surface.set_content(&rendered);
        true
    }

    pub fn plain_text(&self) -> String {
        markup::plain_text(&self.history.current().content)
    }

    pub fn stats(&self) -> DocumentStats {
        markup::stats(&self.history.current().content)
    }

    pub fn copy_to(&self, clipboard: &mut dyn ClipboardSink) -> Result<(), EditorError> {
        clipboard
            .set_text(&self.plain_text())
            .map_err(EditorError::Clipboard)
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        if !self.highlights.is_empty() {
            debug!(pending = self.highlights.len(), "releasing revision highlights");
        }
        self.highlights.clear();
    }
}
