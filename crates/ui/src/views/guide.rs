use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{GuideIntent, GuideOutcome, GuideScreenVm, start_guide};
use super::intro::IntroCard;
use super::pattern_note::PatternNoteCard;
use super::question::QuestionCard;

#[cfg(test)]
use crate::vm::GuideVm;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GuideView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let reflection = ctx.reflection();

    let vm = use_signal({
        let reflection = reflection.clone();
        move || start_guide(&reflection).ok()
    });
    let error = use_signal(|| None::<ViewError>);
    let notice = use_signal(|| None::<String>);

    let dispatch_intent = use_callback(move |intent: GuideIntent| {
        let mut vm = vm;
        let mut error = error;
        let mut notice = notice;

        if intent == GuideIntent::Acknowledge {
            let outcome = vm.read().as_ref().map(|vm| vm.acknowledge(&reflection));
            match outcome {
                Some(Ok(GuideOutcome::Acknowledged { answers })) => {
                    error.set(None);
                    notice.set(Some(format!(
                        "Proceeding with {answers} reflections."
                    )));
                }
                Some(Ok(GuideOutcome::Continue)) => {}
                Some(Err(err)) => error.set(Some(err)),
                None => error.set(Some(ViewError::Unknown)),
            }
            return;
        }

        if matches!(intent, GuideIntent::Refine) {
            notice.set(None);
        }
        if let Some(vm) = vm.write().as_mut() {
            vm.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GuideTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let Some(guide) = vm_guard.as_ref() else {
        return rsx! {
            div { class: "page",
                p { "{ViewError::Unknown.message()}" }
            }
        };
    };
    let header = guide.header(&content);
    let screen = guide.screen(&content);
    let step_aria = format!("Step indicator: {}", header.step_label);
    let current_error = *error.read();
    let current_notice = notice.read().clone();

    rsx! {
        header { class: "guide-header", role: "banner",
            div { class: "guide-header__brand",
                span { class: "guide-header__mark", aria_hidden: "true", "✦" }
                h1 { class: "guide-header__title", "{header.title}" }
            }
            div { class: "guide-header__step", aria_label: "{step_aria}", "{header.step_label}" }
        }
        main { class: "guide-main",
            match screen {
                GuideScreenVm::Intro(intro) => rsx! {
                    IntroCard { intro, on_intent: dispatch_intent }
                },
                GuideScreenVm::Question(card) => rsx! {
                    QuestionCard { card, on_intent: dispatch_intent }
                },
                GuideScreenVm::PatternNote(note) => rsx! {
                    PatternNoteCard {
                        note,
                        notice: current_notice,
                        error: current_error,
                        on_intent: dispatch_intent,
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GuideTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GuideIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<GuideVm>>>>>,
}

#[cfg(test)]
impl GuideTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GuideIntent>, vm: Signal<Option<GuideVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GuideIntent> {
        (*self.dispatch.borrow()).expect("guide dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<GuideVm>> {
        (*self.vm.borrow()).expect("guide vm registered")
    }
}
