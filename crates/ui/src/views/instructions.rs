use dioxus::prelude::*;

use crate::vm::InstructionsVm;

#[component]
pub fn InstructionsView(
    vm: InstructionsVm,
    on_proceed: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "screen instructions",
            button { r#type: "button", class: "back", onclick: move |_| on_back.call(()), "← Back to Topics" }
            h2 { "The Gauntlet" }
            p { class: "lead", "A cross-domain challenge for the truly fearless." }
            ol { class: "rules",
                for rule in vm.rules.clone() {
                    li { key: "{rule}", "{rule}" }
                }
            }
            button { r#type: "button", class: "primary", onclick: move |_| on_proceed.call(()), "I'm Ready!" }
        }
    }
}
