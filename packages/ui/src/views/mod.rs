mod user_list;
pub use user_list::UserListView;

mod add_user;
pub use add_user::AddUserView;

mod edit_user;
pub use edit_user::EditUserView;
