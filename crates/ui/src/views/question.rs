use dioxus::prelude::*;

use crate::vm::{OptionState, QuestionVm, TimerTone};

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Idle => "option",
        OptionState::Correct => "option correct",
        OptionState::Wrong => "option wrong",
        OptionState::Muted => "option muted",
    }
}

fn timer_class(tone: TimerTone) -> &'static str {
    match tone {
        TimerTone::Calm => "timer calm",
        TimerTone::Warning => "timer warning",
        TimerTone::Critical => "timer critical",
        TimerTone::Settled => "timer settled",
    }
}

#[component]
pub fn QuestionView(
    vm: QuestionVm,
    on_select: EventHandler<String>,
    on_next: EventHandler<()>,
    on_quit: EventHandler<()>,
) -> Element {
    let options = vm
        .options
        .iter()
        .map(|option| (option.clone(), option.value.clone()));

    rsx! {
        section { class: "screen question",
            div { class: "question-header",
                span { class: "counter", "Question {vm.number} of {vm.total}" }
                button { r#type: "button", class: "quit", onclick: move |_| on_quit.call(()), "Quit" }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {vm.progress_percent}%" }
            }
            div {
                class: timer_class(vm.timer.tone),
                style: "--timer-left: {vm.timer.percent_left()}%",
                "{vm.timer.remaining}"
            }

            h2 { class: "question-text", dangerous_inner_html: "{vm.text_html}" }

            div { class: "options",
                for (option, value) in options {
                    button {
                        key: "{option.letter}",
                        r#type: "button",
                        class: option_class(option.state),
                        disabled: option.disabled,
                        onclick: move |_| on_select.call(value.clone()),
                        span { class: "option-letter", "{option.letter}." }
                        span { class: "option-label", dangerous_inner_html: "{option.label_html}" }
                    }
                }
            }

            if let Some(explanation) = vm.explanation_html.as_ref() {
                div { class: "explanation",
                    if vm.timed_out {
                        p { class: "timed-out", "Time's up!" }
                    }
                    h3 { "Explanation" }
                    p { dangerous_inner_html: "{explanation}" }
                    if let Some(label) = vm.next_label {
                        button { r#type: "button", class: "primary next", onclick: move |_| on_next.call(()), "{label}" }
                    }
                }
            }
        }
    }
}
