pub mod auth;
pub mod toasts;
