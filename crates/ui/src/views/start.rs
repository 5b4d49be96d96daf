use dioxus::prelude::*;

use crate::vm::StartVm;

fn chip_class(is_gauntlet: bool) -> &'static str {
    if is_gauntlet { "topic-chip gauntlet" } else { "topic-chip" }
}

#[component]
pub fn StartView(vm: StartVm, on_topic: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);
    let blank = draft.read().trim().is_empty();

    rsx! {
        section { class: "screen start",
            h2 { "Craft Your Challenge" }
            p { class: "lead", "Enter any topic, or pick one below." }

            form {
                class: "topic-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let topic = draft.read().trim().to_string();
                    if !topic.is_empty() {
                        on_topic.call(topic);
                    }
                },
                input {
                    r#type: "text",
                    value: "{draft}",
                    placeholder: "e.g. 'The Renaissance' or 'Quantum Physics'",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button { r#type: "submit", disabled: blank, "Generate Quiz" }
            }

            if let Some(error) = vm.error.as_ref() {
                p { class: "error", role: "alert", "{error}" }
            }

            h3 { "Popular Topics" }
            div { class: "topic-grid",
                for chip in vm.presets.clone() {
                    button {
                        key: "{chip.label}",
                        r#type: "button",
                        class: chip_class(chip.is_gauntlet),
                        onclick: move |_| on_topic.call(chip.label.to_string()),
                        "{chip.label}"
                    }
                }
            }
        }
    }
}
