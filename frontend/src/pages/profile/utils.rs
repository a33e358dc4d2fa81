use crate::api::{ApiError, ChangePasswordRequest, ProfileChanges};

pub const PROFILE_UPDATED_MESSAGE: &str = "Dados atualizados com sucesso!";
pub const PASSWORD_CHANGED_MESSAGE: &str = "Senha alterada com sucesso!";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "As senhas não coincidem.";
pub const PASSWORD_MODAL_CLOSE_DELAY_MS: u32 = 1500;

const REQUIRED_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileChanges, ApiError> {
        let email = self.email.trim();
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        if email.is_empty() || first_name.is_empty() || last_name.is_empty() {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(ProfileChanges {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<ChangePasswordRequest, ApiError> {
        if self.current.is_empty() || self.new.is_empty() || self.confirm.is_empty() {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        if self.new != self.confirm {
            return Err(ApiError::validation(PASSWORD_MISMATCH_MESSAGE));
        }
        Ok(ChangePasswordRequest {
            current_password: self.current.clone(),
            new_password: self.new.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_new_password_is_rejected_locally() {
        let form = PasswordForm {
            current: "antiga".into(),
            new: "nova-senha".into(),
            confirm: "nova-senhA".into(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.error, "As senhas não coincidem.");
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn matching_passwords_build_request() {
        let form = PasswordForm {
            current: "antiga".into(),
            new: "nova".into(),
            confirm: "nova".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.current_password, "antiga");
        assert_eq!(request.new_password, "nova");
    }

    #[test]
    fn profile_form_requires_every_field() {
        let form = ProfileForm {
            email: "ana@example.com".into(),
            first_name: " ".into(),
            last_name: "Souza".into(),
        };
        assert!(form.validate().is_err());

        let form = ProfileForm {
            first_name: " Ana ".into(),
            ..form
        };
        assert_eq!(form.validate().unwrap().first_name, "Ana");
    }
}
