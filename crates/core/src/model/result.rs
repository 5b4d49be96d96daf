/// Feedback band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Excellent,
    Good,
    NiceTry,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => ScoreBand::Perfect,
            75..=99 => ScoreBand::Excellent,
            50..=74 => ScoreBand::Good,
            _ => ScoreBand::NiceTry,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect Score! You're a true mastermind!",
            ScoreBand::Excellent => "Excellent work! You have some serious knowledge.",
            ScoreBand::Good => "Good job! A solid performance.",
            ScoreBand::NiceTry => "Nice try! Every quiz is a chance to learn.",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "🏆",
            ScoreBand::Excellent => "✨",
            ScoreBand::Good => "😊",
            ScoreBand::NiceTry => "🧠",
        }
    }
}

/// Final tally of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    score: u32,
    total: u32,
}

impl QuizResult {
    /// `score` is clamped to `total`.
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Score as a whole percentage, rounded half up. Zero for an empty quiz.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score * 200 + self.total) / (self.total * 2)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}
