use quiz_core::model::{GAUNTLET_TOPIC, PRESET_TOPICS};
use services::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicChipVm {
    pub label: &'static str,
    pub is_gauntlet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub presets: Vec<TopicChipVm>,
    pub error: Option<String>,
}

/// Preset catalog followed by the gauntlet chip, plus the last load error.
#[must_use]
pub fn map_start(session: &Session) -> StartVm {
    let presets = PRESET_TOPICS
        .into_iter()
        .map(|label| TopicChipVm {
            label,
            is_gauntlet: false,
        })
        .chain(std::iter::once(TopicChipVm {
            label: GAUNTLET_TOPIC,
            is_gauntlet: true,
        }))
        .collect();

    StartVm {
        presets,
        error: session.last_error().map(str::to_owned),
    }
}
