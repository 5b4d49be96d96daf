mod controller;
mod countdown;
mod session;

pub use controller::{LoadOutcome, LoadTicket, QuizController, RoundToken};
pub use countdown::ScopedCountdown;
pub use session::Session;
