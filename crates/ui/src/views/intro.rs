use dioxus::prelude::*;

use crate::vm::{GuideIntent, IntroVm};

#[component]
pub(super) fn IntroCard(intro: IntroVm, on_intent: EventHandler<GuideIntent>) -> Element {
    rsx! {
        section {
            class: "card intro-card",
            role: "region",
            aria_label: "Introduction to your purpose journey",
            if !intro.eyebrow.is_empty() {
                div { class: "intro-card__eyebrow", "{intro.eyebrow}" }
            }
            h2 { class: "intro-card__heading", "{intro.heading}" }
            div { class: "intro-card__body", dangerous_inner_html: "{intro.body_html}" }
            button {
                class: "btn btn-primary intro-card__begin",
                id: "guide-begin",
                r#type: "button",
                aria_label: "Start answering discovery questions",
                onclick: move |_| on_intent.call(GuideIntent::Begin),
                "{intro.begin_label} →"
            }
        }
    }
}
