use serde::Deserialize;
use serde_json::Value;

use quiz_core::model::{Question, QuestionDraft};

use crate::error::SupplyError;

#[derive(Debug, Deserialize)]
struct QuestionEnvelope {
    questions: Vec<Value>,
}

/// Parse a service reply into validated questions.
///
/// Elements are decoded one by one, so a wrong-typed or invalid element only
/// drops itself. Order is preserved.
///
/// # Errors
///
/// Returns `SupplyError::Malformed` when the text is not a JSON object with a
/// `questions` list, or when no element survives validation.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, SupplyError> {
    let body = strip_code_fence(text);
    let envelope: QuestionEnvelope = serde_json::from_str(body)
        .map_err(|err| SupplyError::Malformed(format!("expected a questions list: {err}")))?;

    let received = envelope.questions.len();
    let questions: Vec<Question> = envelope
        .questions
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match decode_question(value) {
            Ok(question) => Some(question),
            Err(reason) => {
                tracing::debug!(index, %reason, "dropping malformed question");
                None
            }
        })
        .collect();

    if questions.len() < received {
        tracing::warn!(
            received,
            kept = questions.len(),
            "some generated questions were malformed and filtered out"
        );
    }

    if questions.is_empty() {
        return Err(SupplyError::Malformed(format!(
            "none of the {received} received questions were usable"
        )));
    }

    Ok(questions)
}

fn decode_question(value: Value) -> Result<Question, String> {
    let draft: QuestionDraft = serde_json::from_value(value).map_err(|err| err.to_string())?;
    draft.validate().map_err(|err| err.to_string())
}

// Structured output is plain JSON, but some models still wrap it in a fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = match inner.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &inner[4..],
        _ => inner,
    };
    inner.trim()
}
