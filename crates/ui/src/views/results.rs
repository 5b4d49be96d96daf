use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultsView(vm: ResultVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "screen results",
            div { class: "emoji", "{vm.emoji}" }
            h2 { "Quiz Complete!" }
            p { class: "score", "{vm.score_label}" }
            p { class: "percentage", "{vm.percentage}%" }
            p { class: "message", "{vm.message}" }
            button { r#type: "button", class: "primary", onclick: move |_| on_restart.call(()), "Play Another" }
        }
    }
}
