pub mod components;
pub mod panel;
pub mod query;
pub mod repository;
pub mod sequence;
pub mod table;
pub mod utils;
pub mod view_model;

pub use panel::AdminUsersPage;
