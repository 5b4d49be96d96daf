use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// Number of answer options every question must carry.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, got {len}")]
    OptionCount { len: usize },

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer is not one of the options")]
    AnswerNotInOptions,

    #[error("explanation cannot be empty")]
    EmptyExplanation,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question record as produced by the content service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub explanation: String,
}

impl QuestionDraft {
    /// Check the draft against the question invariants.
    ///
    /// Text and explanation are stored trimmed. Options and the correct answer
    /// are compared exactly.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` the draft violates.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                len: self.options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(OPTION_COUNT);
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::AnswerNotInOptions);
        }

        let explanation = self.explanation.trim();
        if explanation.is_empty() {
            return Err(QuestionError::EmptyExplanation);
        }

        Ok(Question {
            text: text.to_string(),
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: explanation.to_string(),
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question that satisfies every invariant.
///
/// Only obtainable through `QuestionDraft::validate`, so holders may rely on
/// exactly four unique options with the correct answer among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }

    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
