use dioxus::prelude::*;

use api::StoredUser;
use forms::UserId;
use ui::views::EditUserView;

use crate::Route;

#[component]
pub fn EditUser(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        EditUserView {
            id: UserId::new(id),
            on_saved: move |_: StoredUser| {
                nav.push(Route::Home {});
            },
            Link { class: "cancel-link", to: Route::Home {}, "Cancel" }
        }
    }
}
