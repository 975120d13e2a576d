use dioxus::prelude::*;

use api::StoredUser;
use ui::views::AddUserView;

use crate::Route;

#[component]
pub fn AddUser() -> Element {
    let nav = use_navigator();

    rsx! {
        AddUserView {
            on_saved: move |_: StoredUser| {
                nav.push(Route::Home {});
            },
            Link { class: "cancel-link", to: Route::Home {}, "Cancel" }
        }
    }
}
