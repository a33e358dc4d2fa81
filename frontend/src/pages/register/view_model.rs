use super::{
    repository::RegisterRepository,
    utils::{RegisterForm, REDIRECT_DELAY_MS, REGISTER_SUCCESS_MESSAGE},
};
use crate::{
    api::{use_api_client, ApiError, SignUpRequest, SignUpResponse},
    router::LOGIN_ROUTE,
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub register_action: Action<SignUpRequest, Result<SignUpResponse, ApiError>>,
}

impl RegisterViewModel {
    fn snapshot(&self) -> RegisterForm {
        RegisterForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn submit(&self) -> bool {
        if self.register_action.pending().get_untracked() {
            return false;
        }
        self.success.set(None);
        match self.snapshot().validate() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

/// Shows the confirmation and schedules the trip back to the login page.
pub fn settle_registration(
    result: Result<SignUpResponse, ApiError>,
    error: RwSignal<Option<ApiError>>,
    success: RwSignal<Option<String>>,
) {
    match result {
        Ok(response) => {
            error.set(None);
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| REGISTER_SUCCESS_MESSAGE.to_string());
            success.set(Some(message));
            navigation::replace_after(LOGIN_ROUTE, REDIRECT_DELAY_MS);
        }
        Err(err) => {
            success.set(None);
            error.set(Some(err));
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let repository = RegisterRepository::new_with_client(Rc::new(use_api_client()));
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |request: &SignUpRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.sign_up(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            settle_registration(result, error, success);
        }
    });

    RegisterViewModel {
        first_name: create_rw_signal(String::new()),
        last_name: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        confirm_password: create_rw_signal(String::new()),
        error,
        success,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{provide_session, SessionHandle};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn mismatched_passwords_stay_local() {
        with_runtime(|| {
            provide_session(SessionHandle::in_memory());
            let vm = use_register_view_model();
            vm.first_name.set("Ana".into());
            vm.last_name.set("Souza".into());
            vm.email.set("ana@example.com".into());
            vm.password.set("segredo".into());
            vm.confirm_password.set("outro".into());

            assert!(!vm.submit());
            assert_eq!(
                vm.error.get().map(|e| e.error).as_deref(),
                Some("As senhas não coincidem")
            );
            assert_eq!(vm.register_action.version().get(), 0);
        });
    }

    #[test]
    fn success_shows_message_and_returns_to_login() {
        with_runtime(|| {
            let _ = navigation::take_history();
            let error = create_rw_signal(None::<ApiError>);
            let success = create_rw_signal(None::<String>);
            settle_registration(Ok(SignUpResponse::default()), error, success);
            assert_eq!(success.get().as_deref(), Some(REGISTER_SUCCESS_MESSAGE));
            assert_eq!(navigation::take_history(), vec![LOGIN_ROUTE.to_string()]);
        });
    }

    #[test]
    fn server_rejection_is_surfaced() {
        with_runtime(|| {
            let _ = navigation::take_history();
            let error = create_rw_signal(None::<ApiError>);
            let success = create_rw_signal(None::<String>);
            settle_registration(
                Err(ApiError::request_failed("E-mail já cadastrado")),
                error,
                success,
            );
            assert_eq!(
                error.get().map(|e| e.error).as_deref(),
                Some("E-mail já cadastrado")
            );
            assert!(navigation::take_history().is_empty());
        });
    }
}
