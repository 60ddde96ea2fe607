//! Prompt construction for revision requests.
//!
//! The system message carries the style guide and the response template;
//! the user message carries the document, the selection and any
//! annotations that fall inside the selection.

use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::style::WritingStyle;
use serde::{Deserialize, Serialize};

/// Role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

const CREATIVE_GUIDE: &str = "Be imaginative and expressive. Use vivid language, metaphors, and engaging narrative techniques while maintaining clarity.";
const FORMAL_GUIDE: &str = "Maintain a professional and polished tone. Use clear, precise language and formal vocabulary appropriate for business or official contexts.";
const ACADEMIC_GUIDE: &str = "Follow academic writing conventions. Use scholarly language, maintain objectivity, and ensure proper structure and argumentation.";
const CASUAL_GUIDE: &str = "Adopt a conversational and relaxed tone while maintaining clarity and coherence. Use natural language and accessible vocabulary.";
const TECHNICAL_GUIDE: &str = "Focus on precision and clarity. Use technical terminology appropriately, maintain a logical structure, and prioritize accuracy.";

const SYSTEM_PREAMBLE: &str = "You are an expert writing assistant. Your task is to improve the selected text while maintaining consistency with the overall document context.";

const SYSTEM_FOCUS: &str = "\
Focus on:
1. Maintaining consistency with the document's context
2. Appropriate tone and style
3. Clarity and coherence
4. Grammar and mechanics
5. Impact and engagement";

const RESPONSE_TEMPLATE: &str = "\
Format your response exactly like this:
Revised Text: \"[Your revised version here]\"
Explanation of changes: [Your detailed explanation here]
Consider Annotations: [true/false] - Indicate if you think the annotations should be considered for this revision";

pub fn style_guide(style: WritingStyle) -> &'static str {
    match style {
        WritingStyle::Creative => CREATIVE_GUIDE,
        WritingStyle::Formal => FORMAL_GUIDE,
        WritingStyle::Academic => ACADEMIC_GUIDE,
        WritingStyle::Casual => CASUAL_GUIDE,
        WritingStyle::Technical => TECHNICAL_GUIDE,
    }
}

/// Style guide for a style name as it arrives from outside (routing state,
/// a config file). Unknown names get the formal guide.
pub fn style_guide_for_name(name: &str) -> &'static str {
    style_guide(WritingStyle::from_name_or_default(name))
}

pub fn system_prompt(style: WritingStyle) -> String {
    format!(
        "{SYSTEM_PREAMBLE} {guide}\n\n{SYSTEM_FOCUS}\n\n{RESPONSE_TEMPLATE}",
        guide = style_guide(style)
    )
}

/// Annotations whose span text lies inside the selection.
pub fn relevant_annotations<'a>(
    annotations: &'a [Annotation],
    selected_text: &str,
) -> Vec<&'a Annotation> {
    annotations
        .iter()
        .filter(|a| a.is_within(selected_text))
        .collect()
}

/// Build the user message.
///
/// `context` is the selection extended with its following word; it is only
/// mentioned when it adds something beyond the selection itself.
pub fn user_prompt(
    document: &str,
    selected_text: &str,
    context: Option<&str>,
    annotations: &[&Annotation],
) -> String {
    let mut prompt = format!(
        "Here's the full document for context:\n\"\"\"\n{document}\n\"\"\"\n\n\
         Please improve this specific text: \"{selected_text}\"\n"
    );

    if let Some(context) = context.filter(|c| *c != selected_text) {
        prompt.push_str(&format!("In the document it reads: \"{context}\"\n"));
    }

    if !annotations.is_empty() {
        prompt.push_str(&format!(
            "\nThere are {} annotation(s) related to this text:\n",
            annotations.len()
        ));
        let lines: Vec<String> = annotations
            .iter()
            .map(|a| format!("- \"{}\": {}", a.span_text, a.comment))
            .collect();
        prompt.push_str(&lines.join("\n"));
        prompt.push('\n');
    }

    prompt
}

/// The two-message conversation sent to the endpoint.
pub fn build_messages(
    document: &str,
    selected_text: &str,
    context: Option<&str>,
    style: WritingStyle,
    annotations: &[Annotation],
) -> Vec<PromptMessage> {
    let relevant = relevant_annotations(annotations, selected_text);
    vec![
        PromptMessage {
            role: PromptRole::System,
            content: system_prompt(style),
        },
        PromptMessage {
            role: PromptRole::User,
            content: user_prompt(document, selected_text, context, &relevant),
        },
    ]
}
