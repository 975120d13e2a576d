use dioxus::prelude::*;

use forms::UserId;

use crate::components::{Button, ButtonVariant};
use crate::session_log::use_session_log;

/// Users created or edited in this session, newest first.
#[component]
pub fn UserListView(on_add: EventHandler<()>, on_edit: EventHandler<UserId>) -> Element {
    let log = use_session_log();
    let entries: Vec<_> = log.read().recent().cloned().collect();

    rsx! {
        div {
            class: "user-list",
            div {
                class: "user-list__header",
                h2 { "Users" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_add.call(()),
                    "Add User"
                }
            }

            if entries.is_empty() {
                div {
                    class: "user-list__empty",
                    p { "No users saved yet." }
                    p {
                        class: "user-list__hint",
                        "Users you add or edit here will show up in this list."
                    }
                }
            } else {
                table {
                    class: "user-list__table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Username" }
                            th { "E-mail" }
                            th { "" }
                            th { "" }
                        }
                    }
                    tbody {
                        for (position, entry) in entries.into_iter().enumerate() {
                            tr {
                                key: "{entry.row_key(position)}",
                                td { "{entry.record.name}" }
                                td { "{entry.record.username}" }
                                td { "{entry.record.email}" }
                                td {
                                    class: "user-list__meta",
                                    "{entry.action.label()} at {entry.timestamp}"
                                }
                                td {
                                    if let Some(id) = entry.id.clone() {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| on_edit.call(id.clone()),
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
