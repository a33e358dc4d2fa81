use crate::api::{ApiError, SignInRequest};

#[derive(Debug, Clone, Copy)]
pub struct LoginFormState {
    pub email: leptos::RwSignal<String>,
    pub password: leptos::RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: leptos::create_rw_signal(String::new()),
            password: leptos::create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<SignInRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Informe o e-mail"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Informe a senha"));
    }
    Ok(SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            validate_credentials("  ", "x").unwrap_err().error,
            "Informe o e-mail"
        );
        assert_eq!(
            validate_credentials("ana@example.com", "").unwrap_err().error,
            "Informe a senha"
        );
        let request = validate_credentials(" ana@example.com ", "segredo").unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.password, "segredo");
    }
}
