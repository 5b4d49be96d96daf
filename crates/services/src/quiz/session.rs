use quiz_core::model::{Difficulty, GameState, Question, Topic};

/// Mutable state of one quiz attempt, owned by `QuizController`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(super) state: GameState,
    pub(super) topic: Option<Topic>,
    pub(super) difficulty: Option<Difficulty>,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) score: u32,
    pub(super) last_error: Option<String>,
}

impl Session {
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the question on screen; equals the question count once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True when the next advance finishes the quiz.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
