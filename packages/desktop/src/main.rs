use dioxus::prelude::*;

use api::Backend;
use settings::Settings;
use ui::{BackendProvider, SessionLogProvider};
use views::{AddUser, EditUser, Home, NavbarLayout};

mod settings;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavbarLayout)]
        #[route("/")]
        Home {},
        #[route("/adduser")]
        AddUser {},
        #[route("/edituser/:id")]
        EditUser { id: String },
}

fn main() {
    dioxus::logger::initialize_default();

    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::error!("failed to read settings, using defaults: {e}");
        Settings::default()
    });
    let offline = settings.offline || std::env::args().any(|arg| arg == "--offline");
    let settings = Settings { offline, ..settings };

    dioxus::LaunchBuilder::new()
        .with_context(settings)
        .launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_context::<Settings>();
    let config = settings.frontend();
    let backend = use_hook(|| {
        if settings.offline {
            Backend::memory()
        } else {
            Backend::http(&config)
        }
    });

    rsx! {
        BackendProvider {
            config: config,
            backend: backend,
            SessionLogProvider {
                Router::<Route> {}
            }
        }
    }
}
