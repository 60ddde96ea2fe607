use scribewise_completion::prompt::{
    build_messages, style_guide, style_guide_for_name, system_prompt, PromptRole,
};
use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::style::WritingStyle;

#[test]
fn unknown_style_name_uses_formal_guide_verbatim() {
    assert_eq!(style_guide_for_name("whimsical"), style_guide(WritingStyle::Formal));
    assert_eq!(
        style_guide_for_name("whimsical"),
        "Maintain a professional and polished tone. Use clear, precise language and formal vocabulary appropriate for business or official contexts."
    );
}

#[test]
fn every_style_has_a_distinct_guide() {
    let mut guides: Vec<_> = WritingStyle::ALL.iter().map(|s| style_guide(*s)).collect();
    guides.sort();
    guides.dedup();
    assert_eq!(guides.len(), 5);
}

#[test]
fn system_prompt_carries_guide_and_template() {
    let prompt = system_prompt(WritingStyle::Technical);
    assert!(prompt.contains(style_guide(WritingStyle::Technical)));
    assert!(prompt.contains("Revised Text: \"[Your revised version here]\""));
    assert!(prompt.contains("Explanation of changes:"));
    assert!(prompt.contains("Consider Annotations: [true/false]"));
}

#[test]
fn user_prompt_embeds_document_selection_and_relevant_annotations() {
    let annotations = vec![
        Annotation::new("hip surgery", "cite source"),
        Annotation::new("Dunblane", "add context"),
    ];
    let messages = build_messages(
        "Full document text.",
        "his comeback from hip surgery in 2019",
        None,
        WritingStyle::Formal,
        &annotations,
    );

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, PromptRole::System);
    assert_eq!(messages[1].role, PromptRole::User);

    let user = &messages[1].content;
    assert!(user.contains("\"\"\"\nFull document text.\n\"\"\""));
    assert!(user.contains("Please improve this specific text: \"his comeback from hip surgery in 2019\""));
    assert!(user.contains("There are 1 annotation(s) related to this text:"));
    assert!(user.contains("- \"hip surgery\": cite source"));
    assert!(!user.contains("Dunblane"));
}

#[test]
fn user_prompt_omits_annotation_block_when_none_apply() {
    let messages = build_messages("Doc.", "Doc", None, WritingStyle::Casual, &[]);
    assert!(!messages[1].content.contains("annotation(s)"));
}

#[test]
fn context_is_mentioned_only_when_it_extends_the_selection() {
    let with = build_messages(
        "Murray's journey from Dunblane",
        "Murray's journey",
        Some("Murray's journey from"),
        WritingStyle::Formal,
        &[],
    );
    assert!(with[1].content.contains("In the document it reads: \"Murray's journey from\""));

    let without = build_messages("abc", "abc", Some("abc"), WritingStyle::Formal, &[]);
    assert!(!without[1].content.contains("In the document it reads"));
}
