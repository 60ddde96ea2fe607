//! Transient "pending revision" highlights.
//!
//! Highlights are a rendering overlay keyed by snapshot id and expiry time.
//! Stored snapshots never carry the revision marker, so expiring or
//! cancelling a highlight never touches history.

use std::borrow::Cow;
use std::ops::Range;

use jiff::{SignedDuration, Timestamp};
use scribewise_core::models::snapshot::DocumentSnapshot;
use tracing::debug;
use uuid::Uuid;

use crate::markup;

/// How long a freshly applied revision stays highlighted.
pub const REVISION_HIGHLIGHT_DECAY: SignedDuration = SignedDuration::from_secs(15);

/// Cancellation handle returned by [`HighlightOverlay::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightHandle(u64);

#[derive(Debug, Clone)]
struct Highlight {
    handle: HighlightHandle,
    snapshot_id: Uuid,
    /// Byte range of the revised text within the snapshot content.
    range: Range<usize>,
    expires_at: Timestamp,
}

#[derive(Debug, Default)]
pub struct HighlightOverlay {
    highlights: Vec<Highlight>,
    next_handle: u64,
}

impl HighlightOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight the byte range `range` of the given snapshot until
    /// `now + decay`.
    pub fn schedule(
        &mut self,
        snapshot_id: Uuid,
        range: Range<usize>,
        now: Timestamp,
        decay: SignedDuration,
    ) -> HighlightHandle {
        let handle = HighlightHandle(self.next_handle);
        self.next_handle += 1;
        let expires_at = now.checked_add(decay).unwrap_or(Timestamp::MAX);
        self.highlights.push(Highlight {
            handle,
            snapshot_id,
            range,
            expires_at,
        });
        debug!(%snapshot_id, %expires_at, "revision highlight scheduled");
        handle
    }

    /// Returns whether the handle was still live.
    pub fn cancel(&mut self, handle: HighlightHandle) -> bool {
        let before = self.highlights.len();
        self.highlights.retain(|h| h.handle != handle);
        before != self.highlights.len()
    }

    /// Drop every highlight that has expired at `now`. Returns how many were
    /// dropped.
    pub fn expire(&mut self, now: Timestamp) -> usize {
        let before = self.highlights.len();
        self.highlights.retain(|h| h.expires_at > now);
        let dropped = before - self.highlights.len();
        if dropped > 0 {
            debug!(dropped, "revision highlights expired");
        }
        dropped
    }

    pub fn clear(&mut self) {
        self.highlights.clear();
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Whether any live highlight applies to `snapshot_id` at `now`.
    pub fn is_active(&self, snapshot_id: Uuid, now: Timestamp) -> bool {
        self.highlights
            .iter()
            .any(|h| h.snapshot_id == snapshot_id && h.expires_at > now)
    }

    /// Snapshot content with live highlights for that snapshot wrapped in the
    /// revision marker. Borrowed when nothing applies. Ranges that fall
    /// outside the content or off a char boundary are skipped.
    pub fn render<'a>(&self, snapshot: &'a DocumentSnapshot, now: Timestamp) -> Cow<'a, str> {
        let mut live: Vec<&Range<usize>> = self
            .highlights
            .iter()
            .filter(|h| h.snapshot_id == snapshot.id && h.expires_at > now)
            .map(|h| &h.range)
            .collect();
        if live.is_empty() {
            return Cow::Borrowed(snapshot.content.as_str());
        }

        // Back to front so earlier offsets stay valid.
        live.sort_by(|a, b| b.start.cmp(&a.start));
        let mut content = snapshot.content.clone();
        let mut floor = content.len();
        for range in live {
            if range.end > floor {
                continue;
            }
            let Some(text) = content.get(range.clone()) else {
                continue;
            };
            let marked = markup::revision_marked(text);
            content.replace_range(range.clone(), &marked);
            floor = range.start;
        }
        Cow::Owned(content)
    }
}
