use crate::api::{ApiError, Role, SignUpRequest};

pub const REGISTER_SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso!";
pub const REDIRECT_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Client-side checks that run before any request.
    pub fn validate(&self) -> Result<SignUpRequest, ApiError> {
        let required = [
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
            self.password.as_str(),
            self.confirm_password.as_str(),
        ];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ApiError::validation("Todos os campos são obrigatórios"));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("As senhas não coincidem"));
        }
        Ok(SignUpRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            roles: vec![Role::User],
        })
    }
}
