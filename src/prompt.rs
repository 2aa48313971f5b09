//! Prompt composition

pub const QUESTION_PREFIX: &str = "Please answer this question: ";

/// Enrichment text (possibly empty) followed by the question.
pub fn compose_prompt(enrichment: &str, message: &str) -> String {
    let mut prompt = String::with_capacity(enrichment.len() + QUESTION_PREFIX.len() + message.len());
    prompt.push_str(enrichment);
    prompt.push_str(QUESTION_PREFIX);
    prompt.push_str(message);
    prompt
}
