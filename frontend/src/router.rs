use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{provide_api_client, ApiClient},
    components::guard::{RequireAdmin, RequireSession},
    pages::{
        admin_users::AdminUsersPage, home::HomePage, login::LoginPage, profile::ProfilePage,
        register::RegisterPage,
    },
    state::{
        auth::AuthProvider,
        session::{provide_session, SessionHandle},
    },
};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const PROFILE_ROUTE: &str = "/profile";
pub const ADMIN_USERS_ROUTE: &str = "/admin/users";

pub const ROUTE_PATHS: &[&str] = &[
    HOME_ROUTE,
    LOGIN_ROUTE,
    REGISTER_ROUTE,
    PROFILE_ROUTE,
    ADMIN_USERS_ROUTE,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[PROFILE_ROUTE, ADMIN_USERS_ROUTE];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let session = SessionHandle::browser();
    provide_session(session.clone());
    provide_api_client(ApiClient::with_session(session));
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_ROUTE view=HomePage/>
                    <Route path=LOGIN_ROUTE view=LoginPage/>
                    <Route path=REGISTER_ROUTE view=RegisterPage/>
                    <Route path=PROFILE_ROUTE view=ProtectedProfile/>
                    <Route path=ADMIN_USERS_ROUTE view=ProtectedAdminUsers/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireSession><ProfilePage/></RequireSession> }
}

#[component]
fn ProtectedAdminUsers() -> impl IntoView {
    view! { <RequireAdmin><AdminUsersPage/></RequireAdmin> }
}
