//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod backend;
pub use backend::{use_backend, use_frontend_config, BackendProvider};

mod backend_indicator;
pub use backend_indicator::BackendIndicator;

mod navbar;
pub use navbar::{Navbar, UI_CSS};

pub mod session_log;
pub use session_log::{
    log_saved, use_session_log, SavedAction, SavedUser, SessionLog, SessionLogProvider,
};

mod timer;

pub mod form_driver;
pub use form_driver::{FormDriver, FormHost, FormTasks};

mod user_form;
pub use user_form::{use_user_form, FormField, ScheduledTask, UserForm, UserFormHandle};
