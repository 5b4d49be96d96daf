//! Turns a topic/difficulty request into validated questions.

mod gemini;
mod prompt;
mod validate;

use async_trait::async_trait;

use quiz_core::model::{Difficulty, Question, Topic};

use crate::error::SupplyError;

pub use gemini::{GeminiSupplier, SupplierConfig};
pub use prompt::build_prompt;
pub use validate::parse_questions;

/// What to generate: topic, how many and how hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyRequest {
    topic: Topic,
    count: u32,
    difficulty: Difficulty,
}

impl SupplyRequest {
    /// The gauntlet tier overrides `count` with its fixed size.
    #[must_use]
    pub fn new(topic: Topic, count: u32, difficulty: Difficulty) -> Self {
        Self {
            topic,
            count: difficulty.question_count(count),
            difficulty,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Source of quiz questions.
///
/// Implementations return only questions that satisfy the `Question`
/// invariants, in the order received, and never retry on their own.
#[async_trait]
pub trait QuestionSupplier: Send + Sync {
    /// # Errors
    ///
    /// Returns a classified `SupplyError`; raw provider errors never escape.
    async fn supply(&self, request: &SupplyRequest) -> Result<Vec<Question>, SupplyError>;
}
