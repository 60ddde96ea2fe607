use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::revision::Revision;
use scribewise_editor::annotations::AnnotationLedger;
use scribewise_editor::revisions::RevisionLedger;

fn revision(original: &str, revised: &str, explanation: &str) -> Revision {
    Revision {
        id: uuid::Uuid::new_v4(),
        original_text: original.to_string(),
        revised_text: revised.to_string(),
        explanation: explanation.to_string(),
        timestamp: jiff::Timestamp::now(),
    }
}

#[test]
fn consume_overlapping_removes_only_contained_spans() {
    let mut ledger = AnnotationLedger::new();
    ledger.add(Annotation::new("hip surgery", "cite source"));
    ledger.add(Annotation::new("Dunblane", "add context"));

    let consumed =
        ledger.consume_overlapping("exemplified by his comeback from hip surgery in 2019");

    assert_eq!(consumed, vec![Annotation::new("hip surgery", "cite source")]);
    assert_eq!(ledger.as_slice(), &[Annotation::new("Dunblane", "add context")]);
}

#[test]
fn relevant_does_not_consume() {
    let mut ledger = AnnotationLedger::new();
    ledger.add(Annotation::new("hip surgery", "cite source"));

    let relevant = ledger.relevant("comeback from hip surgery");
    assert_eq!(relevant.len(), 1);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn revisions_are_most_recent_first() {
    let mut ledger = RevisionLedger::new();
    let first = revision("a", "b", "first");
    let second = revision("c", "d", "second");
    ledger.record(first.clone());
    ledger.record(second.clone());

    let order: Vec<_> = ledger.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![second.id, first.id]);
    assert_eq!(ledger.get(first.id), Some(&first));
}

#[test]
fn revision_search_filters_and_keeps_order() {
    let mut ledger = RevisionLedger::new();
    ledger.record(revision("Born in Glasgow", "Born in Glasgow, Scotland", "Added country"));
    ledger.record(revision("truly remarkable", "remarkable", "Removed filler"));
    ledger.record(revision("awe-inspiring", "inspiring", "Less hyperbole, more GLASGOW"));

    let hits: Vec<_> = ledger.search("glasgow").map(|r| r.explanation.as_str()).collect();
    assert_eq!(hits, vec!["Less hyperbole, more GLASGOW", "Added country"]);
    assert_eq!(ledger.search("").count(), 3);
    assert_eq!(ledger.search("wimbledon").count(), 0);
}
