use super::utils::{validate_credentials, LoginFormState};
use crate::api::{ApiError, SignInRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<SignInRequest, Result<&'static str, ApiError>>,
}

impl LoginViewModel {
    /// Validates locally and dispatches the sign-in. Returns `false` when
    /// nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_credentials(
            &self.form.email.get_untracked(),
            &self.form.password.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(route) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigation::replace(route);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{provide_session, SessionHandle};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_session(SessionHandle::in_memory());
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn invalid_submit_never_dispatches() {
        with_runtime(|| {
            provide_session(SessionHandle::in_memory());
            let vm = use_login_view_model();
            vm.form.email.set("ana@example.com".into());
            assert!(!vm.submit());
            assert_eq!(vm.error.get().map(|e| e.error).as_deref(), Some("Informe a senha"));
            assert_eq!(vm.login_action.version().get(), 0);
        });
    }
}
