//! Shows which users backend the app is talking to.

use api::Backend;
use dioxus::prelude::*;

use crate::backend::use_backend;
use crate::icons::{FaCloud, FaUserSlash};
use crate::Icon;

/// A small icon for the navbar.
///
/// - **HTTP**: cloud icon, titled with the server address
/// - **Offline**: slashed-user icon, records live only in this window
#[component]
pub fn BackendIndicator() -> Element {
    let backend = use_backend();
    let title = backend.read().describe();

    let indicator = match &*backend.read() {
        Backend::Http(_) => rsx! {
            span {
                class: "backend-indicator backend-indicator--http",
                title: "{title}",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        },
        Backend::Memory(_) => rsx! {
            span {
                class: "backend-indicator backend-indicator--offline",
                title: "Offline: users are kept in memory",
                Icon { icon: FaUserSlash, width: 14, height: 14 }
            }
        },
    };
    indicator
}
