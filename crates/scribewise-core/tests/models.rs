use scribewise_core::error::CoreError;
use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::revision::Revision;
use scribewise_core::models::session::SessionRecord;
use scribewise_core::models::style::WritingStyle;

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
fn style_parses_known_names_case_insensitively() {
    assert_eq!("Academic".parse::<WritingStyle>().unwrap(), WritingStyle::Academic);
    assert_eq!(" casual ".parse::<WritingStyle>().unwrap(), WritingStyle::Casual);
}

#[test]
fn unknown_style_is_an_error_but_lenient_lookup_is_formal() {
    let err = "poetic".parse::<WritingStyle>().unwrap_err();
    assert!(matches!(&err, CoreError::UnknownStyle(name) if name == "poetic"));
    assert_eq!(err.to_string(), "unknown writing style: poetic");
    assert_eq!(WritingStyle::from_name_or_default("poetic"), WritingStyle::Formal);
    assert_eq!(WritingStyle::default(), WritingStyle::Formal);
}

#[test]
fn style_serializes_as_snake_case() {
    let json = serde_json::to_string(&WritingStyle::Technical).unwrap();
    assert_eq!(json, "\"technical\"");
}

#[test]
fn annotation_within_selection() {
    let a = Annotation::new("hip surgery", "cite source");
    assert!(a.is_within("his comeback from hip surgery in 2019"));
    assert!(!a.is_within("his comeback from injury"));
}

#[test]
fn revision_search_is_case_insensitive_across_fields() {
    let r = revision("Murray's journey", "Murray's remarkable path", "Tightened the phrasing");
    assert!(r.matches("REMARKABLE"));
    assert!(r.matches("journey"));
    assert!(r.matches("phrasing"));
    assert!(r.matches(""));
    assert!(!r.matches("wimbledon"));
}

#[test]
fn session_record_round_trips_through_json() {
    let record = SessionRecord::new(WritingStyle::Creative);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"writing_style\":\"creative\""));
    let back: SessionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
