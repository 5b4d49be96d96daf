use quiz_core::model::Difficulty;
use services::QuizController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyChoiceVm {
    pub difficulty: Difficulty,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyVm {
    pub topic: String,
    pub is_gauntlet: bool,
    pub choices: Vec<DifficultyChoiceVm>,
    pub back_label: &'static str,
}

/// The ordinary tiers are always listed; for the gauntlet topic they are
/// shown disabled next to the single gauntlet tier.
#[must_use]
pub fn map_difficulty(quiz: &QuizController) -> DifficultyVm {
    let session = quiz.session();
    let is_gauntlet = session.topic().is_some_and(|topic| topic.is_gauntlet());
    let offered = quiz.offered_difficulties();

    let mut tiers: Vec<Difficulty> = Difficulty::ORDINARY.to_vec();
    if is_gauntlet {
        tiers.push(Difficulty::Gauntlet);
    }

    let choices = tiers
        .into_iter()
        .map(|difficulty| DifficultyChoiceVm {
            difficulty,
            label: difficulty.label(),
            enabled: offered.contains(&difficulty),
        })
        .collect();

    DifficultyVm {
        topic: session
            .topic()
            .map(ToString::to_string)
            .unwrap_or_default(),
        is_gauntlet,
        choices,
        back_label: if is_gauntlet {
            "Back to Rules"
        } else {
            "Back to Topics"
        },
    }
}
