use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Question, QuestionDraft};
use services::{QuestionSupplier, QuizController, RoundToken, SupplyError, SupplyRequest};

use crate::app::{QuizIntent, QuizScreen, QuizTestHandles};
use crate::context::{UiApp, build_app_context};
use crate::views::{
    DifficultyView, InstructionsView, LoadingView, QuestionView, ResultsView, StartView,
};
use crate::vm::ScreenVm;

pub struct FixedSupplier {
    questions: Vec<Question>,
    calls: AtomicUsize,
}

impl FixedSupplier {
    fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionSupplier for FixedSupplier {
    async fn supply(&self, _request: &SupplyRequest) -> Result<Vec<Question>, SupplyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.clone())
    }
}

struct TestApp {
    supplier: Arc<FixedSupplier>,
    question_seconds: u32,
}

impl UiApp for TestApp {
    fn supplier(&self) -> Arc<dyn QuestionSupplier> {
        self.supplier.clone()
    }

    fn question_seconds(&self) -> u32 {
        self.question_seconds
    }
}

pub fn question(text: &str, answer: &str, others: [&str; 3]) -> Question {
    let mut options = vec![answer.to_string()];
    options.extend(others.iter().map(|option| (*option).to_string()));
    QuestionDraft {
        text: text.to_string(),
        options,
        correct_answer: answer.to_string(),
        explanation: format!("The answer is {answer}."),
    }
    .validate()
    .expect("valid question")
}

/// Controller already on its first question, without going through a supplier.
pub fn playing_controller(questions: Vec<Question>) -> QuizController {
    let mut quiz = QuizController::new();
    quiz.choose_topic("Astronomy").expect("topic");
    let ticket = quiz
        .choose_difficulty(quiz_core::model::Difficulty::Easy)
        .expect("difficulty");
    quiz.finish_loading(ticket, Ok(questions));
    quiz
}

#[derive(Props, Clone)]
struct QuizScreenHarnessProps {
    app: Arc<TestApp>,
    handles: Option<QuizTestHandles>,
}

impl PartialEq for QuizScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizScreenHarness(props: QuizScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    if let Some(handles) = props.handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { QuizScreen {} }
}

#[component]
fn ScreenHarness(vm: ScreenVm) -> Element {
    match vm {
        ScreenVm::Start(vm) => rsx! { StartView { vm, on_topic: |_| {} } },
        ScreenVm::Instructions(vm) => rsx! {
            InstructionsView { vm, on_proceed: |_| {}, on_back: |_| {} }
        },
        ScreenVm::SelectDifficulty(vm) => rsx! {
            DifficultyView { vm, on_select: |_| {}, on_back: |_| {} }
        },
        ScreenVm::Loading { topic } => rsx! { LoadingView { topic, on_cancel: |_| {} } },
        ScreenVm::Playing(vm) => rsx! {
            QuestionView { vm, on_select: |_| {}, on_next: |_| {}, on_quit: |_| {} }
        },
        ScreenVm::Finished(vm) => rsx! { ResultsView { vm, on_restart: |_| {} } },
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render the full quiz screen with its own controller and a fixed supplier.
pub fn render_quiz_screen(questions: Vec<Question>) -> String {
    let app = Arc::new(TestApp {
        supplier: Arc::new(FixedSupplier::new(questions)),
        question_seconds: quiz_core::model::QUESTION_SECONDS,
    });
    let mut dom = VirtualDom::new_with_props(
        QuizScreenHarness,
        QuizScreenHarnessProps { app, handles: None },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

/// A live `QuizScreen` driven through its intents, with its countdown running
/// on the test's tokio clock.
pub struct LiveQuizHarness {
    pub dom: VirtualDom,
    pub supplier: Arc<FixedSupplier>,
    handles: QuizTestHandles,
}

impl LiveQuizHarness {
    pub fn new(questions: Vec<Question>, question_seconds: u32) -> Self {
        let supplier = Arc::new(FixedSupplier::new(questions));
        let handles = QuizTestHandles::default();
        let app = Arc::new(TestApp {
            supplier: Arc::clone(&supplier),
            question_seconds,
        });
        let mut dom = VirtualDom::new_with_props(
            QuizScreenHarness,
            QuizScreenHarnessProps {
                app,
                handles: Some(handles.clone()),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            supplier,
            handles,
        }
    }

    pub async fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.settle().await;
    }

    /// Let spawned work (supplier answers, countdown ticks) reach the screen.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            let _ = tokio::time::timeout(Duration::from_millis(10), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Advance the paused clock by whole seconds, then settle.
    pub async fn wait_seconds(&mut self, seconds: u64) {
        tokio::time::sleep(Duration::from_secs(seconds)).await;
        self.settle().await;
    }

    pub fn read<T>(&self, f: impl FnOnce(&QuizController) -> T) -> T {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| f(&quiz.peek()))
    }

    pub fn countdown_token(&self) -> Option<RoundToken> {
        self.dom.in_runtime(|| self.handles.countdown_token())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Render one screen view-model with inert handlers.
pub fn render_screen(vm: ScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { vm });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
