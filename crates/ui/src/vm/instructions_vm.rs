use quiz_core::model::Difficulty;
use services::QuizController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionsVm {
    pub rules: Vec<String>,
}

fn count_label(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Gauntlet rules, worded from the tier's question count and the countdown
/// the controller was configured with.
#[must_use]
pub fn map_instructions(quiz: &QuizController) -> InstructionsVm {
    let questions = count_label(Difficulty::Gauntlet.default_question_count(), "question");
    let seconds = count_label(quiz.question_seconds(), "second");

    InstructionsVm {
        rules: vec![
            format!("{questions}, each harder than anything in the regular tiers."),
            "Topics jump between science, history, art, mathematics and more.".to_string(),
            format!(
                "You have {seconds} per question. When the timer runs out the question counts as missed."
            ),
            "Every question has exactly one correct answer.".to_string(),
        ],
    }
}
