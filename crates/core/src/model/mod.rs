mod difficulty;
mod game_state;
mod question;
mod result;
mod round;
mod topic;

pub use difficulty::Difficulty;
pub use game_state::GameState;
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use result::{QuizResult, ScoreBand};
pub use round::{QUESTION_SECONDS, QuestionRound, RoundError, RoundEvent, RoundOutcome};
pub use topic::{GAUNTLET_TOPIC, PRESET_TOPICS, Topic, TopicError};
