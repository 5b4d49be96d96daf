use quiz_core::model::GameState;
use services::QuizController;

use super::difficulty_vm::{DifficultyVm, map_difficulty};
use super::instructions_vm::{InstructionsVm, map_instructions};
use super::question_vm::{QuestionVm, map_question};
use super::result_vm::{ResultVm, map_result};
use super::start_vm::{StartVm, map_start};

/// One variant per screen; exactly one is on display at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start(StartVm),
    Instructions(InstructionsVm),
    SelectDifficulty(DifficultyVm),
    Loading { topic: String },
    Playing(QuestionVm),
    Finished(ResultVm),
}

#[must_use]
pub fn map_screen(quiz: &QuizController) -> ScreenVm {
    let session = quiz.session();
    match quiz.state() {
        GameState::Start => ScreenVm::Start(map_start(session)),
        GameState::Instructions => ScreenVm::Instructions(map_instructions(quiz)),
        GameState::SelectDifficulty => ScreenVm::SelectDifficulty(map_difficulty(quiz)),
        GameState::Loading => ScreenVm::Loading {
            topic: session
                .topic()
                .map(ToString::to_string)
                .unwrap_or_default(),
        },
        GameState::Playing => match map_question(quiz) {
            Some(vm) => ScreenVm::Playing(vm),
            None => ScreenVm::Start(map_start(session)),
        },
        GameState::Finished => match quiz.result() {
            Some(result) => ScreenVm::Finished(map_result(result)),
            None => ScreenVm::Start(map_start(session)),
        },
    }
}
