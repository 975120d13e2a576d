use dioxus::prelude::*;

use crate::BackendIndicator;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

/// Top bar shared by every page. Platforms pass their route links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            span { class: "navbar__brand", "Users" }
            div {
                class: "navbar__links",
                {children}
            }
            BackendIndicator {}
        }
    }
}
