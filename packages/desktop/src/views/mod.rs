mod navbar_layout;
pub use navbar_layout::NavbarLayout;

mod home;
pub use home::Home;

mod add_user;
pub use add_user::AddUser;

mod edit_user;
pub use edit_user::EditUser;
