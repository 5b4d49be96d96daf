use std::fmt;

/// Questions requested for an ordinary tier.
pub(crate) const STANDARD_QUESTION_COUNT: u32 = 5;

/// Questions requested for the gauntlet, whatever the caller asks for.
pub(crate) const GAUNTLET_QUESTION_COUNT: u32 = 10;

/// Difficulty tier for a quiz.
///
/// `Gauntlet` is the sentinel tier: it is only offered for the gauntlet topic,
/// always asks for a fixed larger question set and replaces the topic with a
/// maximally hard, cross-domain prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Gauntlet,
}

impl Difficulty {
    /// Tiers offered for user-chosen topics, in display order.
    pub const ORDINARY: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn is_gauntlet(self) -> bool {
        matches!(self, Difficulty::Gauntlet)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Gauntlet => "Gauntlet",
        }
    }

    /// Question count the default flow asks for at this tier.
    #[must_use]
    pub fn default_question_count(self) -> u32 {
        self.question_count(STANDARD_QUESTION_COUNT)
    }

    /// Normalise a requested count: the gauntlet always uses its fixed size.
    #[must_use]
    pub fn question_count(self, requested: u32) -> u32 {
        if self.is_gauntlet() {
            GAUNTLET_QUESTION_COUNT
        } else {
            requested
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
