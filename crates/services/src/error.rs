//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{Difficulty, GameState, RoundError, TopicError};

/// Errors emitted by a `QuestionSupplier`.
///
/// `Display` carries the diagnostic detail for logs; `user_message` is what the
/// player sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SupplyError {
    #[error("question supplier is not configured: {0} is not set")]
    Unconfigured(&'static str),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("content service rate limit reached")]
    RateLimited,
    #[error("content service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("content service request failed: {0}")]
    Unknown(String),
}

impl SupplyError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SupplyError::Unconfigured(_) => {
                "The quiz generator is not configured. Set QUIZ_AI_API_KEY and restart the app."
            }
            SupplyError::Malformed(_) => {
                "The quiz generator returned questions we couldn't use. Please try again or pick a different topic."
            }
            SupplyError::RateLimited => {
                "Too many quizzes requested in a short time. Please wait a moment and try again."
            }
            SupplyError::ServiceUnavailable(_) => {
                "The quiz generator is unavailable right now. Please try again later."
            }
            SupplyError::Unknown(_) => {
                "Something went wrong while generating your quiz. Please try again."
            }
        }
    }
}

/// Errors emitted by `QuizController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: GameState,
        action: &'static str,
    },
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error("{difficulty} is not offered for topic {topic}")]
    DifficultyNotOffered {
        topic: String,
        difficulty: Difficulty,
    },
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("current question has not been settled yet")]
    RoundNotLocked,
}
