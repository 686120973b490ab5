use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use reflect_core::time::fixed_clock;
use services::{CompletionNotifier, InMemoryNotifier, ReflectionService, builtin_guide};

use crate::context::{UiApp, build_app_context};
use crate::views::GuideView;
use crate::vm::{GuideIntent, GuideVm};

use super::guide::GuideTestHandles;

#[derive(Clone)]
struct TestApp {
    reflection: Arc<ReflectionService>,
}

impl UiApp for TestApp {
    fn reflection(&self) -> Arc<ReflectionService> {
        Arc::clone(&self.reflection)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: GuideTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { GuideView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: GuideTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: GuideIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&GuideVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(vm.read().as_ref().expect("guide started")))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> (ViewHarness, InMemoryNotifier) {
    let notifier = InMemoryNotifier::new();
    let harness = setup_view_harness_with_notifier(Arc::new(notifier.clone()));
    (harness, notifier)
}

pub fn setup_view_harness_with_notifier(notifier: Arc<dyn CompletionNotifier>) -> ViewHarness {
    let content = Arc::new(builtin_guide().expect("builtin guide"));
    let reflection = Arc::new(ReflectionService::new(fixed_clock(), content, notifier));
    let handles = GuideTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { reflection }),
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
