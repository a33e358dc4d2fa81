use crate::{
    components::guard::{evaluate_access, AccessDecision, AccessRequirement},
    router::LOGIN_ROUTE,
    state::{
        auth::landing_route,
        session::{use_session, Session},
    },
    utils::{navigation, time},
};
use chrono::{DateTime, Utc};
use leptos::*;

/// Where `/` sends the visitor.
pub fn root_destination(session: Option<&Session>, now: DateTime<Utc>) -> &'static str {
    match evaluate_access(session, now, AccessRequirement::Session) {
        AccessDecision::Granted(claims) => landing_route(&claims),
        AccessDecision::Redirect { .. } => LOGIN_ROUTE,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let destination = root_destination(use_session().get().as_ref(), time::now());
    navigation::replace(destination);
    view! {
        <div class="min-h-screen bg-surface"></div>
    }
}
