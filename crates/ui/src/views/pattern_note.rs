use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::{GuideIntent, PatternNoteVm};

#[component]
pub(super) fn PatternNoteCard(
    note: PatternNoteVm,
    notice: Option<String>,
    error: Option<ViewError>,
    on_intent: EventHandler<GuideIntent>,
) -> Element {
    rsx! {
        section { class: "card pattern-card", role: "region", aria_label: "{note.heading}",
            div { class: "pattern-card__header",
                span { class: "icon icon--shield", aria_hidden: "true" }
                h2 { class: "pattern-card__heading", "{note.heading}" }
            }
            div { class: "pattern-card__body",
                p { class: "pattern-card__observation", "{note.observation}" }
                p { class: "pattern-card__insight", "{note.insight}" }
            }
            div { class: "pattern-card__footer",
                p { class: "pattern-card__prompt", "{note.prompt}" }
                if let Some(err) = error {
                    p { class: "pattern-card__error", role: "alert", "{err.message()}" }
                }
                if let Some(message) = notice {
                    p { class: "pattern-card__notice", role: "status", "{message}" }
                }
                div { class: "pattern-card__actions",
                    button {
                        class: "btn btn-secondary",
                        id: "guide-refine",
                        r#type: "button",
                        onclick: move |_| on_intent.call(GuideIntent::Refine),
                        "{note.refine_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "guide-acknowledge",
                        r#type: "button",
                        onclick: move |_| on_intent.call(GuideIntent::Acknowledge),
                        if error.is_some() { "Retry" } else { "{note.acknowledge_label} →" }
                    }
                }
            }
        }
    }
}
