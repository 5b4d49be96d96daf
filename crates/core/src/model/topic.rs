use thiserror::Error;

/// The sentinel topic that leads to the rules screen and the gauntlet tier.
pub const GAUNTLET_TOPIC: &str = "The Gauntlet";

/// Preset topics offered next to free-text entry.
pub const PRESET_TOPICS: [&str; 8] = [
    "General Knowledge",
    "World History",
    "Science & Nature",
    "Movies & Pop Culture",
    "Geography",
    "Art and Literature",
    "Technology",
    "Sports Trivia",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic cannot be empty")]
    Empty,
}

/// Validated quiz topic (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Create a validated topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if the topic is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TopicError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn gauntlet() -> Self {
        Self(GAUNTLET_TOPIC.to_string())
    }

    #[must_use]
    pub fn is_gauntlet(&self) -> bool {
        self.0 == GAUNTLET_TOPIC
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
