use dioxus::prelude::*;

#[component]
pub fn LoadingView(topic: String, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        section { class: "screen loading", aria_busy: "true",
            div { class: "spinner" }
            h2 { "Generating your quiz..." }
            p { class: "topic-name", "{topic}" }
            button { r#type: "button", class: "back", onclick: move |_| on_cancel.call(()), "Cancel" }
        }
    }
}
