use api::StoredUser;
use dioxus::prelude::*;
use forms::FormMode;

use crate::session_log::{log_saved, use_session_log, SavedAction};
use crate::UserForm;

/// Create form. `children` go next to the submit button.
#[component]
pub fn AddUserView(on_saved: EventHandler<StoredUser>, children: Element) -> Element {
    let mut log = use_session_log();

    rsx! {
        UserForm {
            mode: FormMode::Create,
            title: "Add User",
            submit_label: "Create",
            on_saved: move |stored: StoredUser| {
                log_saved(&mut log, SavedAction::Created, stored.clone());
                on_saved.call(stored);
            },
            {children}
        }
    }
}
