pub mod credential;
pub mod goal;
pub mod login_entry;
pub mod screen;
pub mod session_user;
