use serde_json::{Value, json};

use super::SupplyRequest;

pub(crate) const SYSTEM_INSTRUCTION: &str = "You are an assistant that writes quiz questions. \
Generate multiple-choice questions for the requested topic, count and difficulty. \
Every question must have exactly 4 distinct options. The correct answer must be copied \
verbatim from the options. Add a brief, clear explanation of why the correct answer is right. \
Reply with a JSON object that follows the provided schema and nothing else.";

/// Natural-language generation request for `request`.
///
/// The gauntlet ignores the topic and asks for a maximally hard mix of domains.
#[must_use]
pub fn build_prompt(request: &SupplyRequest) -> String {
    let count = request.count();
    if request.difficulty().is_gauntlet() {
        return format!(
            "Generate {count} multiple-choice quiz questions. The topic is a challenging, \
             unpredictable mix of advanced science, obscure history, deep technology, complex art \
             and mind-bending trivia. The questions should be extremely difficult, designed to \
             stump even experts, and should range widely across subjects. Avoid simple trivia and \
             never repeat a question. Provide a detailed explanation for each correct answer."
        );
    }

    format!(
        "Generate {count} multiple-choice quiz questions about \"{topic}\" with {difficulty} \
         difficulty. The questions should be well-formed, clear and relevant to the topic. \
         Provide a concise explanation for each correct answer.",
        topic = request.topic(),
        difficulty = request.difficulty().label().to_lowercase(),
    )
}

/// Structured-output schema sent with every request.
pub(crate) fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "description": "The quiz questions.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": {
                            "type": "STRING",
                            "description": "The question text. Engaging and clear."
                        },
                        "options": {
                            "type": "ARRAY",
                            "description": "Exactly 4 possible answers.",
                            "items": { "type": "STRING" }
                        },
                        "correctAnswer": {
                            "type": "STRING",
                            "description": "The correct answer, copied from the options."
                        },
                        "explanation": {
                            "type": "STRING",
                            "description": "Why the correct answer is right. Educational and concise."
                        }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                }
            }
        },
        "required": ["questions"]
    })
}
