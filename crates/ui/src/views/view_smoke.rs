use quiz_core::model::{Difficulty, GameState, QuestionRound, QuizResult};
use services::QuizController;

use super::test_harness::{
    LiveQuizHarness, playing_controller, question, render_quiz_screen, render_screen,
};
use crate::app::QuizIntent;
use crate::vm::{map_result, map_screen};

fn sun_question() -> quiz_core::model::Question {
    question(
        "Which planet is closest to the <em>Sun</em>?<script>alert(1)</script>",
        "Mercury",
        ["Venus", "Earth", "Mars"],
    )
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_screen_opens_on_the_topic_picker() {
    let html = render_quiz_screen(vec![sun_question()]);
    assert!(html.contains("Craft Your Challenge"), "missing heading in {html}");
    assert!(html.contains("Sports Trivia"), "missing preset in {html}");
    assert!(html.contains("The Gauntlet"), "missing gauntlet chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_shows_the_last_error() {
    let mut quiz = QuizController::new();
    quiz.choose_topic("Comets").unwrap();
    let ticket = quiz.choose_difficulty(quiz_core::model::Difficulty::Hard).unwrap();
    quiz.finish_loading(ticket, Err(services::SupplyError::RateLimited));

    let html = render_screen(map_screen(&quiz));
    let message = services::SupplyError::RateLimited.user_message();
    assert!(html.contains(message), "missing error message in {html}");
    assert!(html.contains("Craft Your Challenge"), "not on start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rules_screen_offers_ready_and_back() {
    let mut quiz = QuizController::new();
    quiz.choose_topic("The Gauntlet").unwrap();

    let html = render_screen(map_screen(&quiz));
    assert!(html.contains("Ready!"), "missing proceed in {html}");
    assert!(html.contains("10 questions"), "missing gauntlet size in {html}");
    assert!(html.contains("10 seconds per question"), "missing countdown length in {html}");
    assert!(html.contains("Back to Topics"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn difficulty_screen_lists_tiers_for_the_topic() {
    let mut quiz = QuizController::new();
    quiz.choose_topic("Volcanoes").unwrap();

    let html = render_screen(map_screen(&quiz));
    assert!(html.contains("Volcanoes"), "missing topic in {html}");
    for label in ["Easy", "Medium", "Hard"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(!html.contains("Gauntlet"), "unexpected gauntlet tier in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_renders_sanitised_question() {
    let quiz = playing_controller(vec![sun_question(), sun_question()]);

    let html = render_screen(map_screen(&quiz));
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("<em>Sun</em>"), "lost inline markup in {html}");
    assert!(!html.contains("<script>"), "script survived in {html}");
    assert!(html.contains("Mercury"), "missing option in {html}");
    assert!(!html.contains("Explanation"), "explanation shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn locked_question_shows_explanation_and_next() {
    let mut quiz = playing_controller(vec![sun_question()]);
    quiz.select_option("Venus").unwrap();

    let html = render_screen(map_screen(&quiz));
    assert!(html.contains("Explanation"), "missing explanation in {html}");
    assert!(html.contains("The answer is Mercury."), "missing explanation text in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish in {html}");
    assert!(html.contains("option wrong"), "wrong choice not marked in {html}");
    assert!(html.contains("option correct"), "answer not revealed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timed_out_question_says_so() {
    let mut quiz = playing_controller(vec![sun_question()]);
    let token = quiz.active_round().unwrap();
    while quiz.active_round().is_some() {
        quiz.tick(token);
    }

    let html = render_screen(map_screen(&quiz));
    assert!(html.contains("class=\"timed-out\""), "missing timeout marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_shows_score_and_band() {
    let vm = map_result(QuizResult::new(3, 5));
    let message = vm.message;

    let html = render_screen(crate::vm::ScreenVm::Finished(vm));
    assert!(html.contains("3 / 5"), "missing score in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(html.contains(message), "missing band message in {html}");
    assert!(html.contains("Play Another"), "missing restart in {html}");
}

fn remaining(harness: &LiveQuizHarness) -> Option<u32> {
    harness.read(|quiz| quiz.round().map(QuestionRound::remaining))
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_follows_the_open_round() {
    let mut harness = LiveQuizHarness::new(vec![sun_question(), sun_question()], 10);
    assert_eq!(harness.countdown_token(), None);

    harness.send(QuizIntent::ChooseTopic("Astronomy".into())).await;
    harness.send(QuizIntent::ChooseDifficulty(Difficulty::Easy)).await;
    assert_eq!(harness.supplier.calls(), 1);
    assert_eq!(harness.read(QuizController::state), GameState::Playing);
    let first = harness.read(QuizController::active_round);
    assert!(first.is_some());
    assert_eq!(harness.countdown_token(), first);
    assert_eq!(remaining(&harness), Some(10));

    harness.wait_seconds(1).await;
    assert_eq!(remaining(&harness), Some(9));
    let html = harness.render();
    assert!(html.contains("--timer-left: 90%"), "timer not redrawn in {html}");
    harness.wait_seconds(1).await;
    assert_eq!(remaining(&harness), Some(8));

    // Answering stops the clock.
    harness.send(QuizIntent::Select("Mercury".into())).await;
    assert_eq!(harness.countdown_token(), None);
    harness.wait_seconds(3).await;
    assert_eq!(remaining(&harness), Some(8));
    assert_eq!(harness.read(|quiz| quiz.session().score()), 1);

    // Advancing starts a fresh countdown and the old one stays silent.
    harness.send(QuizIntent::Next).await;
    let second = harness.read(QuizController::active_round);
    assert!(second.is_some());
    assert_ne!(second, first);
    assert_eq!(harness.countdown_token(), second);
    assert_eq!(remaining(&harness), Some(10));
    harness.wait_seconds(1).await;
    assert_eq!(remaining(&harness), Some(9));

    harness.send(QuizIntent::Quit).await;
    assert_eq!(harness.read(QuizController::state), GameState::Start);
    assert_eq!(harness.countdown_token(), None);
    harness.wait_seconds(3).await;
    assert_eq!(harness.read(QuizController::state), GameState::Start);
    assert_eq!(remaining(&harness), None);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn new_game_after_quit_counts_from_the_top() {
    let mut harness = LiveQuizHarness::new(vec![sun_question()], 5);
    harness.send(QuizIntent::ChooseTopic("Astronomy".into())).await;
    harness.send(QuizIntent::ChooseDifficulty(Difficulty::Medium)).await;
    harness.wait_seconds(2).await;
    assert_eq!(remaining(&harness), Some(3));

    harness.send(QuizIntent::Quit).await;
    harness.send(QuizIntent::ChooseTopic("Astronomy".into())).await;
    harness.send(QuizIntent::ChooseDifficulty(Difficulty::Medium)).await;
    assert_eq!(harness.supplier.calls(), 2);
    assert_eq!(remaining(&harness), Some(5));
    harness.wait_seconds(1).await;
    assert_eq!(remaining(&harness), Some(4));
}
