use dioxus::prelude::*;

use crate::vm::{GuideIntent, QuestionCardVm};

/// Ctrl/Cmd + Enter submits the current reflection.
fn is_submit_chord(evt: &KeyboardEvent) -> bool {
    let modifiers = evt.data.modifiers();
    evt.data.key() == Key::Enter
        && (modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META))
}

#[component]
pub(super) fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<GuideIntent>) -> Element {
    let next_class = if card.can_advance {
        "btn btn-primary"
    } else {
        "btn btn-primary btn--disabled"
    };

    rsx! {
        section { class: "card question-card", role: "region",
            div { class: "question-card__header",
                div { class: "question-card__chapter",
                    span { class: "icon icon--{card.chapter_icon}", aria_hidden: "true" }
                    h2 { "{card.chapter_label}" }
                }
                div { class: "question-card__progress", "{card.progress_label}" }
            }
            p { class: "question-card__prompt", "{card.question_text}" }
            div { class: "question-card__answer",
                textarea {
                    class: "question-card__input",
                    id: "guide-answer",
                    value: "{card.draft}",
                    placeholder: "{card.placeholder}",
                    aria_label: "{card.answer_aria_label}",
                    autofocus: true,
                    oninput: move |evt: FormEvent| on_intent.call(GuideIntent::EditDraft(evt.value())),
                    onkeydown: move |evt: KeyboardEvent| {
                        if is_submit_chord(&evt) {
                            evt.prevent_default();
                            on_intent.call(GuideIntent::Advance);
                        }
                    },
                }
                if !card.speech_hint.is_empty() {
                    div { class: "question-card__speech", aria_hidden: "true", "🎙 {card.speech_hint}" }
                }
            }
            div { class: "question-card__footer",
                div { class: "question-card__hint", "{card.footer_hint}" }
                div { class: "question-card__actions",
                    if card.show_back {
                        button {
                            class: "btn btn-secondary",
                            id: "guide-back",
                            r#type: "button",
                            aria_label: "Previous question",
                            onclick: move |_| on_intent.call(GuideIntent::Retreat),
                            "← Back"
                        }
                    }
                    button {
                        class: "{next_class}",
                        id: "guide-next",
                        r#type: "button",
                        disabled: !card.can_advance,
                        onclick: move |_| on_intent.call(GuideIntent::Advance),
                        "{card.next_label} →"
                    }
                }
            }
        }
    }
}
