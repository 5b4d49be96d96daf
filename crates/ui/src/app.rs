#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use quiz_core::model::{Difficulty, RoundEvent};
#[cfg(test)]
use services::RoundToken;
use services::{QuizController, QuizError, ScopedCountdown};

use crate::context::AppContext;
use crate::views::{
    DifficultyView, InstructionsView, LoadingView, QuestionView, ResultsView, StartView,
};
use crate::vm::{ScreenVm, map_screen};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "AI Quiz Generator" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizScreen {}
            }
        }
    }
}

/// Everything the screens can ask the controller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ChooseTopic(String),
    Proceed,
    Back,
    ChooseDifficulty(Difficulty),
    CancelLoading,
    Select(String),
    Next,
    Quit,
    Restart,
}

fn log_rejected<T>(result: Result<T, QuizError>, intent: &QuizIntent) {
    if let Err(err) = result {
        tracing::debug!(error = %err, ?intent, "intent rejected");
    }
}

/// Owns the quiz controller and renders whichever screen it is on.
#[component]
pub fn QuizScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let question_seconds = ctx.question_seconds();
    let supplier = ctx.supplier();

    let mut quiz = use_signal(move || QuizController::new().with_question_seconds(question_seconds));
    let mut countdown = use_signal(|| None::<ScopedCountdown>);

    // Exactly one countdown runs, for the open round if there is one. Replacing
    // the guard aborts the previous task.
    let active_round = use_memo(move || quiz.read().active_round());
    use_effect(move || {
        countdown.set(None);
        let Some(token) = active_round() else {
            return;
        };
        let (guard, mut ticks) = ScopedCountdown::every_second(token);
        countdown.set(Some(guard));
        spawn(async move {
            while let Some(token) = ticks.recv().await {
                if !matches!(quiz.write().tick(token), RoundEvent::Ticked { .. }) {
                    break;
                }
            }
        });
    });

    let dispatch = use_callback(move |intent: QuizIntent| match &intent {
        QuizIntent::ChooseTopic(raw) => log_rejected(quiz.write().choose_topic(raw), &intent),
        QuizIntent::Proceed => log_rejected(quiz.write().proceed(), &intent),
        QuizIntent::Back => log_rejected(quiz.write().back(), &intent),
        QuizIntent::ChooseDifficulty(difficulty) => {
            let ticket = match quiz.write().choose_difficulty(*difficulty) {
                Ok(ticket) => ticket,
                Err(err) => {
                    tracing::warn!(error = %err, "difficulty rejected");
                    return;
                }
            };
            let supplier = supplier.clone();
            spawn(async move {
                let result = supplier.supply(ticket.request()).await;
                quiz.write().finish_loading(ticket, result);
            });
        }
        QuizIntent::CancelLoading => log_rejected(quiz.write().abort_loading(), &intent),
        QuizIntent::Select(choice) => {
            if let Err(err) = quiz.write().select_option(choice) {
                tracing::warn!(error = %err, "answer rejected");
            }
        }
        QuizIntent::Next => log_rejected(quiz.write().advance(), &intent),
        QuizIntent::Quit => log_rejected(quiz.write().abandon(), &intent),
        QuizIntent::Restart => log_rejected(quiz.write().restart(), &intent),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, quiz, countdown);
            }
        }
    }

    let screen = map_screen(&quiz.read());

    rsx! {
        header { class: "app-header",
            h1 { "AI Quiz Generator" }
        }
        main { class: "app-main",
            match screen {
                ScreenVm::Start(vm) => rsx! {
                    StartView {
                        vm,
                        on_topic: move |raw: String| dispatch.call(QuizIntent::ChooseTopic(raw)),
                    }
                },
                ScreenVm::Instructions(vm) => rsx! {
                    InstructionsView {
                        vm,
                        on_proceed: move |()| dispatch.call(QuizIntent::Proceed),
                        on_back: move |()| dispatch.call(QuizIntent::Back),
                    }
                },
                ScreenVm::SelectDifficulty(vm) => rsx! {
                    DifficultyView {
                        vm,
                        on_select: move |difficulty: Difficulty| {
                            dispatch.call(QuizIntent::ChooseDifficulty(difficulty));
                        },
                        on_back: move |()| dispatch.call(QuizIntent::Back),
                    }
                },
                ScreenVm::Loading { topic } => rsx! {
                    LoadingView {
                        topic,
                        on_cancel: move |()| dispatch.call(QuizIntent::CancelLoading),
                    }
                },
                ScreenVm::Playing(vm) => rsx! {
                    QuestionView {
                        vm,
                        on_select: move |choice: String| dispatch.call(QuizIntent::Select(choice)),
                        on_next: move |()| dispatch.call(QuizIntent::Next),
                        on_quit: move |()| dispatch.call(QuizIntent::Quit),
                    }
                },
                ScreenVm::Finished(vm) => rsx! {
                    ResultsView {
                        vm,
                        on_restart: move |()| dispatch.call(QuizIntent::Restart),
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizController>>>>,
    countdown: Rc<RefCell<Option<Signal<Option<ScopedCountdown>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        quiz: Signal<QuizController>,
        countdown: Signal<Option<ScopedCountdown>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
        *self.countdown.borrow_mut() = Some(countdown);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizController> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }

    /// Round the running countdown belongs to, if one is running.
    pub(crate) fn countdown_token(&self) -> Option<RoundToken> {
        let countdown = (*self.countdown.borrow()).expect("countdown signal registered");
        (*countdown.peek()).as_ref().map(ScopedCountdown::token)
    }
}
