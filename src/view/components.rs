pub mod auth_route;
pub mod form;
pub mod shell;
pub mod user_status;
pub mod with_toasts;
