use crate::{
    router::{LOGIN_ROUTE, PROFILE_ROUTE},
    state::{
        auth::{decode_claims, TokenClaims},
        session::{use_session, Session, SessionHandle},
    },
    utils::{navigation, time},
};
use chrono::{DateTime, Utc};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    Session,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    Granted(TokenClaims),
    Redirect {
        to: &'static str,
        clear_session: bool,
    },
}

impl AccessDecision {
    fn to_login() -> Self {
        Self::Redirect {
            to: LOGIN_ROUTE,
            clear_session: true,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// Client-side gate for protected pages. The claims are never verified here;
/// this only decides what to render; the API still authorizes every call.
pub fn evaluate_access(
    session: Option<&Session>,
    now: DateTime<Utc>,
    requirement: AccessRequirement,
) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::to_login();
    };
    if session.is_expired(now) {
        return AccessDecision::to_login();
    }
    let claims = match decode_claims(&session.token) {
        Ok(claims) => claims,
        Err(err) => {
            log::warn!("Stored token could not be decoded: {}", err);
            return AccessDecision::to_login();
        }
    };
    if requirement == AccessRequirement::Admin && !claims.is_admin() {
        return AccessDecision::Redirect {
            to: PROFILE_ROUTE,
            clear_session: false,
        };
    }
    AccessDecision::Granted(claims)
}

pub fn enforce_access(
    session: &SessionHandle,
    now: DateTime<Utc>,
    requirement: AccessRequirement,
) -> AccessDecision {
    let decision = evaluate_access(session.get().as_ref(), now, requirement);
    if let AccessDecision::Redirect { to, clear_session } = &decision {
        log::info!("Access to {:?} page denied; redirecting to {}", requirement, to);
        if *clear_session {
            session.clear();
        }
    }
    decision
}

fn guard_view(requirement: AccessRequirement, children: ChildrenFn) -> View {
    let decision = enforce_access(&use_session(), time::now(), requirement);
    match decision {
        AccessDecision::Granted(claims) => {
            provide_context(claims);
            children().into_view()
        }
        AccessDecision::Redirect { to, .. } => {
            navigation::replace(to);
            ().into_view()
        }
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    guard_view(AccessRequirement::Session, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guard_view(AccessRequirement::Admin, children)
}

/// Claims of the user admitted by the enclosing guard.
pub fn use_granted_claims() -> Option<TokenClaims> {
    use_context::<TokenClaims>()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireSession};
    use crate::router::{LOGIN_ROUTE, PROFILE_ROUTE};
    use crate::state::session::{provide_session, Session, SessionHandle};
    use crate::test_support::helpers::token_with_roles;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::navigation;
    use chrono::Utc;
    use leptos::*;

    fn session_with(roles: Option<&[&str]>) -> SessionHandle {
        let handle = SessionHandle::in_memory();
        if let Some(roles) = roles {
            handle
                .set(&Session::starting_at(token_with_roles(roles), Utc::now()))
                .unwrap();
        }
        handle
    }

    #[test]
    fn require_session_renders_children_for_live_session() {
        let handle = session_with(Some(&["user"]));
        let html = render_to_string(move || {
            provide_session(handle.clone());
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_session_redirects_to_login_without_rendering() {
        let _ = navigation::take_history();
        let handle = session_with(None);
        let html = render_to_string(move || {
            provide_session(handle.clone());
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(!html.contains("protected-content"));
        assert_eq!(navigation::take_history(), vec![LOGIN_ROUTE.to_string()]);
    }

    #[test]
    fn require_admin_renders_children_for_admin() {
        let handle = session_with(Some(&["admin"]));
        let html = render_to_string(move || {
            provide_session(handle.clone());
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_sends_regular_user_to_profile() {
        let _ = navigation::take_history();
        let handle = session_with(Some(&["user"]));
        let kept = handle.clone();
        let html = render_to_string(move || {
            provide_session(handle.clone());
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
        assert_eq!(navigation::take_history(), vec![PROFILE_ROUTE.to_string()]);
        assert!(kept.get().is_some());
    }
}
