use dioxus::prelude::*;

use forms::UserId;
use ui::views::UserListView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        UserListView {
            on_add: move |_| {
                nav.push(Route::AddUser {});
            },
            on_edit: move |id: UserId| {
                nav.push(Route::EditUser { id: id.to_string() });
            },
        }
    }
}
