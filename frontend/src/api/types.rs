use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub first_access: Option<String>,
    #[serde(default)]
    pub last_access: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn primary_role(&self) -> Option<Role> {
        self.roles.iter().find_map(|r| Role::parse(r))
    }

    pub fn roles_label(&self) -> String {
        if self.roles.is_empty() {
            "-".to_string()
        } else {
            self.roles.join(", ")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `/users` and `/users/inactives`. The server spells the total `totalItens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub page_index: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default, rename = "totalItens", alias = "totalItems")]
    pub total_itens: u64,
}

/// The editable profile fields; sent by both the admin and the self-service update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChanges {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ProfileChanges {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    pub fn apply_to(&self, user: &mut User) {
        user.email = self.email.clone();
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionsRequest {
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão com o servidor";

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn connection() -> Self {
        Self::with_code(CONNECTION_ERROR_MESSAGE, "CONNECTION_ERROR")
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "INVALID_RESPONSE")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds the error for a non-2xx response from the server's JSON body.
    ///
    /// `message` may be a string or, for validation failures, an array of
    /// strings; the array is kept under `details.errors`.
    pub fn from_response_body(status: u16, body: Option<&Value>, fallback: &str) -> Self {
        let code = if status == 401 {
            "UNAUTHORIZED"
        } else {
            "REQUEST_FAILED"
        };
        let message = body.and_then(|b| b.get("message"));
        match message {
            Some(Value::String(msg)) if !msg.trim().is_empty() => Self::with_code(msg.clone(), code),
            Some(Value::Array(items)) if !items.is_empty() => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                // A 401 stays UNAUTHORIZED so callers still redirect to login.
                let code = if status == 401 { code } else { "VALIDATION_ERROR" };
                Self {
                    error: parts.join("; "),
                    code: code.to_string(),
                    details: Some(serde_json::json!({ "errors": parts })),
                }
            }
            _ => Self::with_code(fallback, code),
        }
    }
}

impl From<crate::state::session::SessionError> for ApiError {
    fn from(error: crate::state::session::SessionError) -> Self {
        ApiError::unknown(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_deserializes_camel_case_with_optional_timestamps() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ana@example.com",
            "firstName": "Ana",
            "lastName": "Souza",
            "roles": ["admin"],
            "createdAt": "2025-01-02T10:00:00.000Z",
            "lastAccess": null
        }))
        .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.primary_role(), Some(Role::Admin));
        assert!(user.first_access.is_none());
        assert!(user.last_access.is_none());
        assert_eq!(user.created_at.as_deref(), Some("2025-01-02T10:00:00.000Z"));
    }

    #[test]
    fn roles_label_joins_or_dashes() {
        let mut user: User = serde_json::from_value(json!({
            "id": 1, "email": "a@b.c", "firstName": "A", "lastName": "B"
        }))
        .unwrap();
        assert_eq!(user.roles_label(), "-");
        user.roles = vec!["admin".into(), "user".into()];
        assert_eq!(user.roles_label(), "admin, user");
    }

    #[test]
    fn list_response_reads_total_itens_spelling() {
        let resp: UserListResponse = serde_json::from_value(json!({
            "users": [],
            "pageIndex": 2,
            "pageSize": 50,
            "totalItens": 120
        }))
        .unwrap();
        assert_eq!(resp.page_index, Some(2));
        assert_eq!(resp.page_size, Some(50));
        assert_eq!(resp.total_itens, 120);

        let empty: UserListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.users.is_empty());
        assert_eq!(empty.total_itens, 0);
    }

    #[test]
    fn sign_in_response_accepts_token_aliases() {
        let a: SignInResponse = serde_json::from_value(json!({ "token": "t1" })).unwrap();
        let b: SignInResponse = serde_json::from_value(json!({ "accessToken": "t2" })).unwrap();
        assert_eq!(a.token, "t1");
        assert_eq!(b.token, "t2");
    }

    #[test]
    fn sign_up_and_permissions_serialize_lowercase_roles() {
        let body = serde_json::to_value(PermissionsRequest {
            roles: vec![Role::Admin],
        })
        .unwrap();
        assert_eq!(body, json!({ "roles": ["admin"] }));

        let signup = serde_json::to_value(SignUpRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            roles: vec![Role::User],
        })
        .unwrap();
        assert_eq!(signup["firstName"], "A");
        assert_eq!(signup["roles"], json!(["user"]));
    }

    #[test]
    fn change_password_debug_hides_secrets() {
        let request = ChangePasswordRequest {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("secret"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["currentPassword"], "old-secret");
        assert_eq!(body["newPassword"], "new-secret");
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse(" user "), Some(Role::User));
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("owner"), None);
    }

    #[test]
    fn error_from_body_prefers_server_message() {
        let err = ApiError::from_response_body(
            400,
            Some(&json!({ "message": "E-mail já cadastrado" })),
            "Erro no cadastro",
        );
        assert_eq!(err.error, "E-mail já cadastrado");
        assert_eq!(err.code, "REQUEST_FAILED");
    }

    #[test]
    fn error_from_body_falls_back_without_message() {
        let err = ApiError::from_response_body(500, None, "Erro ao buscar usuários");
        assert_eq!(err.error, "Erro ao buscar usuários");

        let blank = ApiError::from_response_body(
            404,
            Some(&json!({ "message": "  " })),
            "Erro ao deletar usuário",
        );
        assert_eq!(blank.error, "Erro ao deletar usuário");
    }

    #[test]
    fn error_from_body_flattens_validation_arrays() {
        let err = ApiError::from_response_body(
            400,
            Some(&json!({ "message": ["email must be an email", "password is too weak"] })),
            "Erro",
        );
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "email must be an email; password is too weak");
        assert_eq!(
            err.details.unwrap()["errors"],
            json!(["email must be an email", "password is too weak"])
        );
    }

    #[test]
    fn unauthorized_status_sets_code() {
        let err = ApiError::from_response_body(401, None, "Erro");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn unauthorized_array_message_keeps_unauthorized_code() {
        let err = ApiError::from_response_body(
            401,
            Some(&json!({ "message": ["token expirado"] })),
            "Erro",
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.error, "token expirado");
        assert_eq!(err.details.unwrap()["errors"], json!(["token expirado"]));
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
        assert_eq!(ApiError::connection().error, CONNECTION_ERROR_MESSAGE);
    }
}
