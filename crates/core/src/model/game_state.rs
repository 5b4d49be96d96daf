use std::fmt;

/// Screen-level state of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Start,
    /// Rules screen, only shown for the gauntlet topic.
    Instructions,
    SelectDifficulty,
    /// Waiting on the question supplier.
    Loading,
    Playing,
    Finished,
}

impl GameState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Start => "start",
            GameState::Instructions => "instructions",
            GameState::SelectDifficulty => "select_difficulty",
            GameState::Loading => "loading",
            GameState::Playing => "playing",
            GameState::Finished => "finished",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
