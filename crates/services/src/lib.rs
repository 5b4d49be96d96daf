#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod supplier;

pub use error::{QuizError, SupplyError};
pub use quiz::{LoadOutcome, LoadTicket, QuizController, RoundToken, ScopedCountdown, Session};
pub use supplier::{
    GeminiSupplier, QuestionSupplier, SupplierConfig, SupplyRequest, parse_questions,
};
