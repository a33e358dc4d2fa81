pub mod edit_profile_modal;
pub mod password_modal;
pub mod profile_card;
