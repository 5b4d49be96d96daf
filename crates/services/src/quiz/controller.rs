use std::fmt;

use quiz_core::model::{
    Difficulty, GameState, QUESTION_SECONDS, Question, QuestionRound, QuizResult, RoundEvent,
    Topic,
};

use super::session::Session;
use crate::error::{QuizError, SupplyError};
use crate::supplier::{QuestionSupplier, SupplyRequest};

//
// ─── TICKETS & TOKENS ──────────────────────────────────────────────────────────
//

/// Identifies one question round. Countdown ticks carry it so a tick that
/// outlives its round is recognised and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoundToken(u64);

impl RoundToken {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Handed out when a load starts; must be returned with the supplier's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    request: SupplyRequest,
}

impl LoadTicket {
    #[must_use]
    pub fn request(&self) -> &SupplyRequest {
        &self.request
    }
}

/// What `finish_loading` did with a supplier answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Playing { questions: usize },
    Failed { message: String },
    /// The session left LOADING before the answer arrived; nothing changed.
    Stale,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives a quiz from topic choice to the results screen.
///
/// All transitions happen through `&mut self`, one event at a time. The only
/// suspension point is the supplier call, split into `choose_difficulty` and
/// `finish_loading` so the caller decides where the request runs.
pub struct QuizController {
    session: Session,
    round: Option<QuestionRound>,
    round_token: RoundToken,
    load_generation: u64,
    question_seconds: u32,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            round: None,
            round_token: RoundToken::default(),
            load_generation: 0,
            question_seconds: QUESTION_SECONDS,
        }
    }

    /// Override the per-question countdown (at least one second).
    #[must_use]
    pub fn with_question_seconds(mut self, seconds: u32) -> Self {
        self.question_seconds = seconds.max(1);
        self
    }

    /// Length of each question's countdown in seconds.
    #[must_use]
    pub fn question_seconds(&self) -> u32 {
        self.question_seconds
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.session.state
    }

    #[must_use]
    pub fn round(&self) -> Option<&QuestionRound> {
        self.round.as_ref()
    }

    /// Token of the round whose countdown should be running, if any.
    #[must_use]
    pub fn active_round(&self) -> Option<RoundToken> {
        let open = self.round.as_ref().is_some_and(|round| !round.is_locked());
        (self.session.state == GameState::Playing && open).then_some(self.round_token)
    }

    /// Difficulty tiers the current topic may be played at.
    #[must_use]
    pub fn offered_difficulties(&self) -> &'static [Difficulty] {
        match &self.session.topic {
            Some(topic) if topic.is_gauntlet() => &[Difficulty::Gauntlet],
            _ => &Difficulty::ORDINARY,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        (self.session.state == GameState::Finished).then(|| {
            let total = u32::try_from(self.session.questions.len()).unwrap_or(u32::MAX);
            QuizResult::new(self.session.score, total)
        })
    }

    //
    // ─── TOPIC & DIFFICULTY ────────────────────────────────────────────────────
    //

    /// START → INSTRUCTIONS for the gauntlet topic, START → SELECT_DIFFICULTY otherwise.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Topic` for a blank topic and
    /// `QuizError::InvalidTransition` outside START.
    pub fn choose_topic(&mut self, raw: &str) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Start, "choose a topic")?;
        let topic = Topic::new(raw)?;

        let next = if topic.is_gauntlet() {
            GameState::Instructions
        } else {
            self.session.last_error = None;
            GameState::SelectDifficulty
        };
        self.session.topic = Some(topic);
        self.transition(next);
        Ok(next)
    }

    /// INSTRUCTIONS → SELECT_DIFFICULTY.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside INSTRUCTIONS.
    pub fn proceed(&mut self) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Instructions, "proceed")?;
        self.transition(GameState::SelectDifficulty);
        Ok(GameState::SelectDifficulty)
    }

    /// Step back one screen before loading starts.
    ///
    /// SELECT_DIFFICULTY returns to INSTRUCTIONS for the gauntlet topic and to
    /// START otherwise; INSTRUCTIONS returns to START. Returning to START drops
    /// the topic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` in any other state.
    pub fn back(&mut self) -> Result<GameState, QuizError> {
        let next = match self.session.state {
            GameState::Instructions => GameState::Start,
            GameState::SelectDifficulty
                if self.session.topic.as_ref().is_some_and(Topic::is_gauntlet) =>
            {
                GameState::Instructions
            }
            GameState::SelectDifficulty => GameState::Start,
            state => {
                return Err(QuizError::InvalidTransition {
                    state,
                    action: "go back",
                });
            }
        };

        self.session.last_error = None;
        if next == GameState::Start {
            self.session.topic = None;
        }
        self.transition(next);
        Ok(next)
    }

    /// SELECT_DIFFICULTY → LOADING. Returns the ticket for the supplier call.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DifficultyNotOffered` when the tier does not match
    /// the topic (the gauntlet topic only plays the gauntlet tier and vice
    /// versa), `QuizError::InvalidTransition` outside SELECT_DIFFICULTY.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<LoadTicket, QuizError> {
        self.expect_state(GameState::SelectDifficulty, "choose a difficulty")?;
        let topic = self
            .session
            .topic
            .clone()
            .ok_or(QuizError::InvalidTransition {
                state: GameState::SelectDifficulty,
                action: "choose a difficulty without a topic",
            })?;
        if !self.offered_difficulties().contains(&difficulty) {
            return Err(QuizError::DifficultyNotOffered {
                topic: topic.to_string(),
                difficulty,
            });
        }

        let request = SupplyRequest::new(topic, difficulty.default_question_count(), difficulty);
        self.session.difficulty = Some(difficulty);
        self.transition(GameState::Loading);
        Ok(LoadTicket {
            generation: self.load_generation,
            request,
        })
    }

    //
    // ─── LOADING ───────────────────────────────────────────────────────────────
    //

    /// Apply the supplier's answer for `ticket`.
    ///
    /// Success moves to PLAYING with a fresh score; failure lands in START with
    /// the user-facing message in `last_error` and no session data kept.
    /// Answers for a load the session has already left are ignored.
    pub fn finish_loading(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Question>, SupplyError>,
    ) -> LoadOutcome {
        if self.session.state != GameState::Loading || ticket.generation != self.load_generation {
            tracing::debug!(
                state = %self.session.state,
                ticket = ticket.generation,
                current = self.load_generation,
                "ignoring stale supplier response"
            );
            return LoadOutcome::Stale;
        }
        self.load_generation = self.load_generation.wrapping_add(1);

        match result {
            Ok(questions) if !questions.is_empty() => {
                let count = questions.len();
                self.session.questions = questions;
                self.session.current_index = 0;
                self.session.score = 0;
                self.session.last_error = None;
                self.start_round();
                self.transition(GameState::Playing);
                LoadOutcome::Playing { questions: count }
            }
            Ok(_) => self.fail_loading(&SupplyError::Malformed(
                "supplier returned an empty question list".into(),
            )),
            Err(err) => self.fail_loading(&err),
        }
    }

    /// LOADING → START without waiting for the supplier. A late answer for the
    /// abandoned load is reported as `LoadOutcome::Stale`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside LOADING.
    pub fn abort_loading(&mut self) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Loading, "abort loading")?;
        self.load_generation = self.load_generation.wrapping_add(1);
        self.transition(GameState::Start);
        self.session.reset();
        Ok(GameState::Start)
    }

    /// Choose `difficulty` and run the whole LOADING step against `supplier`.
    ///
    /// # Errors
    ///
    /// Returns the `choose_difficulty` errors; supplier failures are reported
    /// through `LoadOutcome::Failed`.
    pub async fn load(
        &mut self,
        supplier: &dyn QuestionSupplier,
        difficulty: Difficulty,
    ) -> Result<LoadOutcome, QuizError> {
        let ticket = self.choose_difficulty(difficulty)?;
        let result = supplier.supply(ticket.request()).await;
        Ok(self.finish_loading(ticket, result))
    }

    fn fail_loading(&mut self, err: &SupplyError) -> LoadOutcome {
        tracing::warn!(error = %err, "could not load quiz questions");
        let message = err.user_message().to_string();
        self.transition(GameState::Start);
        self.session.reset();
        self.session.last_error = Some(message.clone());
        LoadOutcome::Failed { message }
    }

    //
    // ─── PLAYING ───────────────────────────────────────────────────────────────
    //

    /// Submit an answer for the current question.
    ///
    /// Scores one point when the choice locks the round and is correct. Returns
    /// `RoundEvent::Ignored` when the round is already settled.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Round` for a choice that is not an option and
    /// `QuizError::InvalidTransition` outside PLAYING.
    pub fn select_option(&mut self, choice: &str) -> Result<RoundEvent, QuizError> {
        self.expect_state(GameState::Playing, "select an option")?;
        let (Some(round), Some(question)) = (
            self.round.as_mut(),
            self.session.questions.get(self.session.current_index),
        ) else {
            return Err(QuizError::InvalidTransition {
                state: GameState::Playing,
                action: "select an option without a question",
            });
        };

        let event = round.select(question, choice)?;
        if let RoundEvent::Locked(outcome) = &event {
            if outcome.is_correct() {
                self.session.score += 1;
            }
            tracing::debug!(
                index = self.session.current_index,
                correct = outcome.is_correct(),
                "question answered"
            );
        }
        Ok(event)
    }

    /// One countdown second for the round identified by `token`.
    ///
    /// Ticks for any other round, for a settled round or outside PLAYING are
    /// ignored. A timeout never scores.
    pub fn tick(&mut self, token: RoundToken) -> RoundEvent {
        if self.session.state != GameState::Playing || token != self.round_token {
            tracing::debug!(?token, current = ?self.round_token, "ignoring stale countdown tick");
            return RoundEvent::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return RoundEvent::Ignored;
        };

        let event = round.tick();
        if matches!(event, RoundEvent::Locked(_)) {
            tracing::debug!(index = self.session.current_index, "question timed out");
        }
        event
    }

    /// Move past a settled question: next question, or FINISHED after the last.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::RoundNotLocked` while the current question is still
    /// open and `QuizError::InvalidTransition` outside PLAYING.
    pub fn advance(&mut self) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Playing, "advance")?;
        if !self.round.as_ref().is_some_and(QuestionRound::is_locked) {
            return Err(QuizError::RoundNotLocked);
        }

        self.session.current_index += 1;
        if self.session.current_index < self.session.questions.len() {
            self.start_round();
            return Ok(GameState::Playing);
        }

        self.end_round();
        self.transition(GameState::Finished);
        Ok(GameState::Finished)
    }

    /// PLAYING → START, dropping the quiz in progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside PLAYING.
    pub fn abandon(&mut self) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Playing, "abandon the quiz")?;
        self.end_round();
        self.transition(GameState::Start);
        self.session.reset();
        Ok(GameState::Start)
    }

    /// FINISHED → START with every session field back at its initial value.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside FINISHED.
    pub fn restart(&mut self) -> Result<GameState, QuizError> {
        self.expect_state(GameState::Finished, "restart")?;
        self.end_round();
        self.transition(GameState::Start);
        self.session.reset();
        Ok(GameState::Start)
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn start_round(&mut self) {
        self.round = Some(QuestionRound::new(self.question_seconds));
        self.round_token = self.round_token.next();
    }

    fn end_round(&mut self) {
        self.round = None;
        self.round_token = self.round_token.next();
    }

    fn expect_state(&self, expected: GameState, action: &'static str) -> Result<(), QuizError> {
        if self.session.state == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition {
                state: self.session.state,
                action,
            })
        }
    }

    fn transition(&mut self, to: GameState) {
        tracing::debug!(from = %self.session.state, %to, "quiz state change");
        self.session.state = to;
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("state", &self.session.state)
            .field("questions_len", &self.session.questions.len())
            .field("current_index", &self.session.current_index)
            .field("score", &self.session.score)
            .field("round", &self.round)
            .field("round_token", &self.round_token)
            .field("load_generation", &self.load_generation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
