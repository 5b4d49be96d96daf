use dioxus::prelude::*;
use quiz_core::model::Difficulty;

use crate::vm::DifficultyVm;

#[component]
pub fn DifficultyView(
    vm: DifficultyVm,
    on_select: EventHandler<Difficulty>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "screen difficulty",
            button { r#type: "button", class: "back", onclick: move |_| on_back.call(()), "← {vm.back_label}" }
            h2 { "Select Difficulty for:" }
            p { class: "topic-name", "{vm.topic}" }
            div { class: "difficulty-grid",
                for choice in vm.choices.clone() {
                    button {
                        key: "{choice.label}",
                        r#type: "button",
                        class: "difficulty-choice",
                        disabled: !choice.enabled,
                        onclick: move |_| on_select.call(choice.difficulty),
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
