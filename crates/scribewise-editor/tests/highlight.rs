use jiff::{SignedDuration, Timestamp};
use scribewise_core::models::snapshot::DocumentSnapshot;
use scribewise_editor::highlight::{HighlightOverlay, REVISION_HIGHLIGHT_DECAY};
use scribewise_editor::markup::revision_marked;

fn at(secs: i64) -> Timestamp {
    Timestamp::from_second(1_700_000_000 + secs).unwrap()
}

#[test]
fn decay_is_fifteen_seconds() {
    assert_eq!(REVISION_HIGHLIGHT_DECAY, SignedDuration::from_secs(15));
}

#[test]
fn render_wraps_text_until_expiry() {
    let snapshot = DocumentSnapshot::new("One two three.");
    let mut overlay = HighlightOverlay::new();
    overlay.schedule(snapshot.id, 4..7, at(0), REVISION_HIGHLIGHT_DECAY);

    let live = overlay.render(&snapshot, at(14));
    assert_eq!(live, format!("One {} three.", revision_marked("two")));

    let decayed = overlay.render(&snapshot, at(15));
    assert_eq!(decayed, "One two three.");
}

#[test]
fn highlight_only_applies_to_its_snapshot() {
    let target = DocumentSnapshot::new("alpha beta");
    let other = DocumentSnapshot::new("alpha beta");
    let mut overlay = HighlightOverlay::new();
    overlay.schedule(target.id, 6..10, at(0), REVISION_HIGHLIGHT_DECAY);

    assert_eq!(overlay.render(&other, at(1)), "alpha beta");
    assert!(overlay.is_active(target.id, at(1)));
    assert!(!overlay.is_active(other.id, at(1)));
}

#[test]
fn cancel_and_expire_release_highlights() {
    let snapshot = DocumentSnapshot::new("x y z");
    let mut overlay = HighlightOverlay::new();
    let first = overlay.schedule(snapshot.id, 0..1, at(0), REVISION_HIGHLIGHT_DECAY);
    overlay.schedule(snapshot.id, 4..5, at(10), REVISION_HIGHLIGHT_DECAY);

    assert!(overlay.cancel(first));
    assert!(!overlay.cancel(first));
    assert_eq!(overlay.len(), 1);

    assert_eq!(overlay.expire(at(20)), 0);
    assert_eq!(overlay.expire(at(25)), 1);
    assert!(overlay.is_empty());
}

#[test]
fn render_wraps_the_scheduled_range_only() {
    let snapshot = DocumentSnapshot::new("cat and cat");
    let mut overlay = HighlightOverlay::new();
    overlay.schedule(snapshot.id, 8..11, at(0), REVISION_HIGHLIGHT_DECAY);

    assert_eq!(
        overlay.render(&snapshot, at(1)),
        format!("cat and {}", revision_marked("cat"))
    );
}

#[test]
fn render_skips_ranges_outside_the_content() {
    let snapshot = DocumentSnapshot::new("héllo");
    let mut overlay = HighlightOverlay::new();
    overlay.schedule(snapshot.id, 0..2, at(0), REVISION_HIGHLIGHT_DECAY);
    overlay.schedule(snapshot.id, 3..40, at(0), REVISION_HIGHLIGHT_DECAY);

    assert_eq!(overlay.render(&snapshot, at(1)), "héllo");
}
