//! Backend and configuration context for the UI.

use api::Backend;
use dioxus::prelude::*;
use forms::FrontendConfig;

/// The users backend every form talks to.
pub fn use_backend() -> Signal<Backend> {
    use_context::<Signal<Backend>>()
}

/// The configuration the app was launched with.
pub fn use_frontend_config() -> Signal<FrontendConfig> {
    use_context::<Signal<FrontendConfig>>()
}

/// Provider component that makes the backend and configuration available.
/// Wrap your app with this component before rendering any form.
#[component]
pub fn BackendProvider(config: FrontendConfig, backend: Backend, children: Element) -> Element {
    let backend = use_context_provider(|| Signal::new(backend));
    use_context_provider(|| Signal::new(config));

    use_hook(|| {
        tracing::info!(backend = %backend.peek().describe(), "users backend ready");
    });

    rsx! {
        {children}
    }
}
