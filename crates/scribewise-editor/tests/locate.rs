use scribewise_editor::locate::{find_span, locate, occurrences};
use scribewise_editor::session::SAMPLE_TEXT;
use uuid::Uuid;

#[test]
fn locate_appends_following_word() {
    assert_eq!(locate("Murray's journey", SAMPLE_TEXT), "Murray's journey from");
}

#[test]
fn locate_without_match_returns_selection() {
    assert_eq!(locate("Roger Federer", SAMPLE_TEXT), "Roger Federer");
}

#[test]
fn locate_at_end_of_document_has_nothing_to_append() {
    assert_eq!(locate("off the court.", SAMPLE_TEXT), "off the court.");
}

#[test]
fn locate_skips_when_next_token_is_punctuation() {
    // ", is awe-inspiring" starts with a comma, so no word follows directly.
    assert_eq!(locate("in 2019", SAMPLE_TEXT), "in 2019");
}

#[test]
fn find_span_reports_first_occurrence() {
    let id = Uuid::new_v4();
    let span = find_span("Murray", SAMPLE_TEXT, id).unwrap();
    assert_eq!(span.snapshot_id, id);
    assert_eq!(&SAMPLE_TEXT[span.range.clone()], "Murray");
    assert_eq!(span.range.start, SAMPLE_TEXT.find("Murray").unwrap());
}

#[test]
fn find_span_rejects_empty_selection() {
    assert!(find_span("", SAMPLE_TEXT, Uuid::new_v4()).is_none());
}

#[test]
fn occurrences_counts_repeats() {
    assert_eq!(occurrences("Andy Murray", SAMPLE_TEXT), 2);
    assert_eq!(occurrences("Dunblane", SAMPLE_TEXT), 1);
    assert_eq!(occurrences("", SAMPLE_TEXT), 0);
}
