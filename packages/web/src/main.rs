use dioxus::prelude::*;

use api::Backend;
use forms::FrontendConfig;
use ui::{BackendProvider, SessionLogProvider};
use views::{AddUser, EditUser, Home, NavbarLayout};

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
    dioxus::launch(App);
}

/// Backend origin and debounce delay, fixed when the bundle is built.
fn frontend_config(api_url: Option<&str>, debounce_ms: Option<&str>) -> FrontendConfig {
    let config = match api_url {
        Some(url) => FrontendConfig::new(url),
        None => FrontendConfig::default(),
    };
    match debounce_ms.and_then(|ms| ms.parse().ok()) {
        Some(ms) => config.with_debounce_ms(ms),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        frontend_config(option_env!("USERS_API_URL"), option_env!("USERS_DEBOUNCE_MS"))
    });
    let backend = use_hook(|| Backend::http(&config));

    use_hook(|| tracing::info!(api = %config.api.base_url, "starting web client"));

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
