use api::StoredUser;
use dioxus::prelude::*;
use forms::{FormMode, UserId};

use crate::session_log::{log_saved, use_session_log, SavedAction};
use crate::UserForm;

/// Edit form for the user with `id`, pre-filled from the backend.
#[component]
pub fn EditUserView(id: UserId, on_saved: EventHandler<StoredUser>, children: Element) -> Element {
    let mut log = use_session_log();

    rsx! {
        UserForm {
            mode: FormMode::Edit(id),
            title: "Edit User",
            submit_label: "Save",
            on_saved: move |stored: StoredUser| {
                log_saved(&mut log, SavedAction::Updated, stored.clone());
                on_saved.call(stored);
            },
            {children}
        }
    }
}
