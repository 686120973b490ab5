use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::GuideView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", GuideView)] Guide {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "theme",
            div { class: "theme__inner",
                Outlet::<Route> {}
            }
        }
    }
}
