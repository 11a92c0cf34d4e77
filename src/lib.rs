pub mod config;
pub mod error;
pub mod events;
pub mod facade;
pub mod guard;
pub mod hooks;
pub mod principal;
pub mod remote;
pub mod session;
pub mod timer;
pub mod view;

#[cfg(test)]
mod test_helpers;
