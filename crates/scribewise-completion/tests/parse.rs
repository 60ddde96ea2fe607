use pretty_assertions::assert_eq;
use scribewise_completion::error::{CompletionError, ErrorKind};
use scribewise_completion::parse::{
    classify, parse_completion, parse_template, CompletionOutcome, RevisionFields,
    DEFAULT_EXPLANATION,
};

#[test]
fn template_with_all_fields() {
    let body = "Revised Text: \"X\"\nExplanation of changes: Y\nConsider Annotations: true";
    assert_eq!(
        parse_template(body).unwrap(),
        RevisionFields {
            revised_text: "X".to_string(),
            explanation: "Y".to_string(),
            consider_annotations: true,
        }
    );
}

#[test]
fn missing_revised_text_is_a_protocol_error() {
    let body = "Explanation of changes: Y\nConsider Annotations: true";
    let err = parse_template(body).unwrap_err();
    assert!(matches!(err, CompletionError::SchemaViolation(_)));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[test]
fn empty_revised_text_is_rejected() {
    assert!(parse_template("Revised Text: \"  \"").is_err());
}

#[test]
fn optional_fields_default() {
    let fields = parse_template("Revised Text: \"Only this\"").unwrap();
    assert_eq!(fields.explanation, DEFAULT_EXPLANATION);
    assert!(!fields.consider_annotations);
}

#[test]
fn malformed_consider_flag_defaults_to_false() {
    let body = "Revised Text: \"A\"\nExplanation of changes: B\nConsider Annotations: maybe";
    let fields = parse_template(body).unwrap();
    assert!(!fields.consider_annotations);
    assert_eq!(fields.explanation, "B");
}

#[test]
fn multi_line_explanation_stops_at_next_label() {
    let body = "Revised Text: \"A\"\nExplanation of changes: First line.\nSecond line.\n\nConsider Annotations: false";
    let fields = parse_template(body).unwrap();
    assert_eq!(fields.explanation, "First line.\nSecond line.");
}

#[test]
fn explanation_runs_to_end_without_next_label() {
    let body = "Preamble.\nRevised Text: \"A\"\nExplanation of changes: Tightened wording.  ";
    assert_eq!(parse_template(body).unwrap().explanation, "Tightened wording.");
}

#[test]
fn json_object_is_structured() {
    let body = r#"{"revised_text": "X", "explanation": "Y", "consider_annotations": true}"#;
    assert!(matches!(classify(body), CompletionOutcome::Structured(_)));
    let fields = parse_completion(body).unwrap();
    assert_eq!(fields.revised_text, "X");
    assert!(fields.consider_annotations);
}

#[test]
fn text_and_partial_json_fall_back() {
    assert!(matches!(
        classify("Revised Text: \"X\""),
        CompletionOutcome::NeedsFallbackParse(_)
    ));
    assert!(matches!(
        classify(r#"{"something": "else"}"#),
        CompletionOutcome::NeedsFallbackParse(_)
    ));
}

#[test]
fn structured_with_empty_revision_fails() {
    let err = parse_completion(r#"{"revised_text": ""}"#).unwrap_err();
    assert!(matches!(err, CompletionError::SchemaViolation(_)));
}
