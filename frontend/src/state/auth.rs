use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine as _,
};
use chrono::{DateTime, Utc};
use leptos::*;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    api::{ApiError, SignInRequest},
    pages::login::repository::LoginRepository,
    router::{ADMIN_USERS_ROUTE, LOGIN_ROUTE, PROFILE_ROUTE},
    state::session::{use_session, Session, SessionHandle},
    utils::{navigation, time, timer},
};

pub const ADMIN_ROLE: &str = "admin";
const SESSION_WATCH_PERIOD_MS: u32 = 30_000;

/// Payload of the bearer token. Read for routing and display only; the
/// signature is never checked here, the API re-validates every request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub authorization: Vec<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        self.authorization
            .iter()
            .any(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
    }

    pub fn display_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.trim().is_empty() {
            self.email.clone()
        } else {
            Some(name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenDecodeError {
    #[error("token must have three segments")]
    Malformed,
    #[error("token payload is not base64url")]
    Encoding,
    #[error("token payload is not a JSON object: {0}")]
    Payload(String),
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 || segments[1].is_empty() {
        return Err(TokenDecodeError::Malformed);
    }
    let payload = segments[1];
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .map_err(|_| TokenDecodeError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|err| TokenDecodeError::Payload(err.to_string()))
}

pub fn landing_route(claims: &TokenClaims) -> &'static str {
    if claims.is_admin() {
        ADMIN_USERS_ROUTE
    } else {
        PROFILE_ROUTE
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub claims: Option<TokenClaims>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn from_session(session: Option<&Session>, now: DateTime<Utc>) -> Self {
        let claims = session
            .filter(|s| !s.is_expired(now))
            .and_then(|s| decode_claims(&s.token).ok());
        Self {
            is_authenticated: claims.is_some(),
            claims,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// One tick of the background expiry check. Returns `true` when a stored
/// session had expired and was cleared.
pub fn expire_session_if_needed(session: &SessionHandle, now: DateTime<Utc>) -> bool {
    match session.get() {
        Some(current) if current.is_expired(now) => {
            log::info!("Session expired at {}; clearing", current.expires_at);
            session.clear();
            true
        }
        _ => false,
    }
}

/// Watcher tick: an expired session is cleared, the auth state signed out
/// and the browser sent to the login page.
pub fn enforce_expiry(
    session: &SessionHandle,
    set_auth_state: WriteSignal<AuthState>,
    now: DateTime<Utc>,
) -> bool {
    if !expire_session_if_needed(session, now) {
        return false;
    }
    set_auth_state.set(AuthState::signed_out());
    navigation::replace(LOGIN_ROUTE);
    true
}

fn create_auth_context(session: SessionHandle) -> AuthContext {
    let (auth_state, set_auth_state) =
        create_signal(AuthState::from_session(session.get().as_ref(), time::now()));

    // Effects only run in the browser, so the watcher never starts during SSR.
    create_effect(move |_| {
        let session = session.clone();
        let guard = timer::every(SESSION_WATCH_PERIOD_MS, move || {
            enforce_expiry(&session, set_auth_state, time::now());
        });
        on_cleanup(move || drop(guard));
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context(use_session());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = use_session();
        create_signal(AuthState::from_session(session.get().as_ref(), time::now()))
    })
}

/// Signs in, stores the session with a fixed client-side TTL and returns the
/// route the user should land on. Nothing is stored when the call fails.
pub async fn login_request(
    request: SignInRequest,
    repo: &LoginRepository,
    session: &SessionHandle,
    set_auth_state: WriteSignal<AuthState>,
    now: DateTime<Utc>,
) -> Result<&'static str, ApiError> {
    let response = repo.sign_in(request).await?;
    let claims = decode_claims(&response.token).map_err(|err| {
        log::warn!("Sign-in returned an unreadable token: {}", err);
        ApiError::invalid_response("Token inválido recebido do servidor")
    })?;
    session.set(&Session::starting_at(response.token, now))?;
    let route = landing_route(&claims);
    set_auth_state.set(AuthState {
        claims: Some(claims),
        is_authenticated: true,
    });
    Ok(route)
}

pub fn logout(session: &SessionHandle, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.set(AuthState::signed_out());
    navigation::replace(LOGIN_ROUTE);
}

pub fn use_login_action() -> Action<SignInRequest, Result<&'static str, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(
        crate::api::use_api_client(),
    ));

    create_action(move |request: &SignInRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(payload, &repo, &session, set_auth, time::now()).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    Callback::new(move |_| logout(&session, set_auth))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::{token_with_claims, token_with_roles};
    use chrono::TimeZone;
    use leptos::create_runtime;
    use serde_json::json;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn decode_claims_reads_authorization_and_names() {
        let token = token_with_claims(json!({
            "sub": 1,
            "email": "ana@example.com",
            "firstName": "Ana",
            "lastName": "Souza",
            "authorization": ["admin", "user"]
        }));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_admin());
        assert_eq!(claims.display_name().as_deref(), Some("Ana Souza"));
        assert_eq!(landing_route(&claims), ADMIN_USERS_ROUTE);
    }

    #[test]
    fn decode_claims_defaults_missing_roles_to_non_admin() {
        let token = token_with_claims(json!({ "email": "joao@example.com" }));
        let claims = decode_claims(&token).unwrap();
        assert!(!claims.is_admin());
        assert_eq!(claims.display_name().as_deref(), Some("joao@example.com"));
        assert_eq!(landing_route(&claims), PROFILE_ROUTE);
    }

    #[test]
    fn decode_claims_rejects_garbage() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenDecodeError::Malformed));
        assert_eq!(decode_claims("a.$$$.c"), Err(TokenDecodeError::Encoding));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert!(matches!(
            decode_claims(&not_json),
            Err(TokenDecodeError::Payload(_))
        ));
    }

    #[test]
    fn decode_claims_tolerates_padded_payload() {
        let padded = format!("h.{}.s", URL_SAFE.encode(br#"{"authorization":["user"]}"#));
        let claims = decode_claims(&padded).unwrap();
        assert_eq!(claims.authorization, vec!["user".to_string()]);
    }

    #[test]
    fn auth_state_from_session_ignores_expired_sessions() {
        let now = Utc.timestamp_millis_opt(10_000_000).unwrap();
        let live = Session::starting_at(token_with_roles(&["user"]), now);
        assert!(AuthState::from_session(Some(&live), now).is_authenticated);

        let later = now + chrono::Duration::minutes(61);
        assert!(!AuthState::from_session(Some(&live), later).is_authenticated);
        assert!(!AuthState::from_session(None, now).is_authenticated);
    }

    #[test]
    fn expiry_watcher_clears_only_expired_sessions() {
        let session = SessionHandle::in_memory();
        let now = Utc.timestamp_millis_opt(0).unwrap();
        assert!(!expire_session_if_needed(&session, now));

        session
            .set(&Session::starting_at(token_with_roles(&["user"]), now))
            .unwrap();
        assert!(!expire_session_if_needed(
            &session,
            now + chrono::Duration::minutes(30)
        ));
        assert!(session.get().is_some());

        assert!(expire_session_if_needed(
            &session,
            now + chrono::Duration::minutes(61)
        ));
        assert!(session.get().is_none());
    }

    #[test]
    fn use_auth_reads_session_without_context() {
        with_runtime(|| {
            provide_context(SessionHandle::in_memory());
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.claims.is_none());
        });
    }

    #[test]
    fn logout_clears_session_and_redirects() {
        with_runtime(|| {
            let session = SessionHandle::in_memory();
            session
                .set(&Session::starting_at(token_with_roles(&["admin"]), Utc::now()))
                .unwrap();
            let (state, set_state) = create_signal(AuthState::from_session(
                session.get().as_ref(),
                Utc::now(),
            ));
            let _ = navigation::take_history();

            logout(&session, set_state);

            assert!(session.get().is_none());
            assert!(!state.get().is_authenticated);
            assert_eq!(navigation::take_history(), vec![LOGIN_ROUTE.to_string()]);
        });
    }
}
