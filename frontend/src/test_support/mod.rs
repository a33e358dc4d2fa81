#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::User;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::{json, Value};

    pub fn fixture_user(id: i64, email: &str, first_name: &str, roles: &[&str]) -> User {
        User {
            id,
            email: email.into(),
            first_name: first_name.into(),
            last_name: "Silva".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            first_access: Some("2025-01-02T10:00:00Z".into()),
            last_access: Some("2025-02-03T18:30:00Z".into()),
            created_at: Some("2025-01-01T09:00:00Z".into()),
        }
    }

    /// Unsigned JWT-shaped token; only the payload segment is meaningful.
    pub fn token_with_claims(claims: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.signature", header, payload)
    }

    pub fn token_with_roles(roles: &[&str]) -> String {
        token_with_claims(json!({
            "sub": "42",
            "email": "ana@example.com",
            "firstName": "Ana",
            "lastName": "Souza",
            "authorization": roles,
        }))
    }
}
