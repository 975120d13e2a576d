use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

#[component]
pub fn NavbarLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Users" }
            Link { to: Route::AddUser {}, "Add User" }
        }
        Outlet::<Route> {}
    }
}
