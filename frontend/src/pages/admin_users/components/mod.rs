pub mod edit_role_modal;
pub mod edit_user_modal;
pub mod filter;
pub mod list;
pub mod pagination;
