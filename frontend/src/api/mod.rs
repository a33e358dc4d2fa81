mod auth;
pub mod client;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
pub use users::{ACTIVE_USERS_PATH, INACTIVE_USERS_PATH};
