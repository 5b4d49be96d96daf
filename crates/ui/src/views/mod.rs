mod difficulty;
mod instructions;
mod loading;
mod question;
mod results;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use difficulty::DifficultyView;
pub use instructions::InstructionsView;
pub use loading::LoadingView;
pub use question::QuestionView;
pub use results::ResultsView;
pub use start::StartView;
