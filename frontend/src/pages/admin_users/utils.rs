use crate::api::{ApiError, ProfileChanges, Role, User};

/// Draft values of the admin edit form. Blank fields keep the user's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEditForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserEditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    pub fn to_changes(&self, original: &User) -> ProfileChanges {
        fn or_original(value: &str, original: &str) -> String {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                original.to_string()
            } else {
                trimmed.to_string()
            }
        }
        ProfileChanges {
            email: or_original(&self.email, &original.email),
            first_name: or_original(&self.first_name, &original.first_name),
            last_name: or_original(&self.last_name, &original.last_name),
        }
    }
}

pub fn parse_role_choice(raw: &str) -> Result<Role, ApiError> {
    Role::parse(raw).ok_or_else(|| ApiError::validation("Selecione um perfil"))
}

pub fn parse_role_filter(raw: &str) -> Option<Role> {
    Role::parse(raw)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}
