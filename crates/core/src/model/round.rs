use thiserror::Error;

use crate::model::Question;

/// Seconds a player gets per question.
pub const QUESTION_SECONDS: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("option is not part of the current question: {0}")]
    UnknownOption(String),
}

/// How a round was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Answered { choice: String, correct: bool },
    TimedOut,
}

impl RoundOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, RoundOutcome::Answered { correct: true, .. })
    }

    #[must_use]
    pub fn choice(&self) -> Option<&str> {
        match self {
            RoundOutcome::Answered { choice, .. } => Some(choice),
            RoundOutcome::TimedOut => None,
        }
    }
}

/// Effect of feeding one event into a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The countdown moved and the round is still open.
    Ticked { remaining: u32 },
    /// This event settled the round.
    Locked(RoundOutcome),
    /// The round was already settled; nothing changed.
    Ignored,
}

/// Answer arbitration for the question currently on screen.
///
/// A round starts open with a full countdown. The first of "option selected"
/// and "countdown reached zero" locks it; every later event is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRound {
    duration: u32,
    remaining: u32,
    outcome: Option<RoundOutcome>,
}

impl QuestionRound {
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            outcome: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Lock the round with the player's choice.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::UnknownOption` if `choice` is not an option of
    /// `question` and the round is still open.
    pub fn select(&mut self, question: &Question, choice: &str) -> Result<RoundEvent, RoundError> {
        if self.is_locked() {
            return Ok(RoundEvent::Ignored);
        }
        if !question.has_option(choice) {
            return Err(RoundError::UnknownOption(choice.to_string()));
        }

        let outcome = RoundOutcome::Answered {
            choice: choice.to_string(),
            correct: question.is_correct(choice),
        };
        self.outcome = Some(outcome.clone());
        Ok(RoundEvent::Locked(outcome))
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> RoundEvent {
        if self.is_locked() {
            return RoundEvent::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.outcome = Some(RoundOutcome::TimedOut);
            return RoundEvent::Locked(RoundOutcome::TimedOut);
        }
        RoundEvent::Ticked {
            remaining: self.remaining,
        }
    }
}
