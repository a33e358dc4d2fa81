use super::{
    repository::ProfileRepository,
    utils::{
        PasswordForm, ProfileForm, PASSWORD_CHANGED_MESSAGE, PASSWORD_MODAL_CLOSE_DELAY_MS,
        PROFILE_UPDATED_MESSAGE,
    },
};
use crate::{
    api::{use_api_client, ApiError, ChangePasswordRequest, ProfileChanges, User},
    router::LOGIN_ROUTE,
    utils::{navigation, timer},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ProfileFields {
    pub email: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
}

impl ProfileFields {
    fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
        }
    }

    pub fn fill_from(&self, user: Option<&User>) {
        self.email.set(user.map(|u| u.email.clone()).unwrap_or_default());
        self.first_name
            .set(user.map(|u| u.first_name.clone()).unwrap_or_default());
        self.last_name
            .set(user.map(|u| u.last_name.clone()).unwrap_or_default());
    }

    fn snapshot(&self) -> ProfileForm {
        ProfileForm {
            email: self.email.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct PasswordFields {
    pub current: RwSignal<String>,
    pub new: RwSignal<String>,
    pub confirm: RwSignal<String>,
}

impl PasswordFields {
    fn new() -> Self {
        Self {
            current: create_rw_signal(String::new()),
            new: create_rw_signal(String::new()),
            confirm: create_rw_signal(String::new()),
        }
    }

    pub fn clear(&self) {
        self.current.set(String::new());
        self.new.set(String::new());
        self.confirm.set(String::new());
    }

    fn snapshot(&self) -> PasswordForm {
        PasswordForm {
            current: self.current.get_untracked(),
            new: self.new.get_untracked(),
            confirm: self.confirm.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub user: RwSignal<Option<User>>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub profile_resource: Resource<u32, Result<User, ApiError>>,
    pub fields: ProfileFields,
    pub edit_open: RwSignal<bool>,
    pub edit_error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub password: PasswordFields,
    pub password_open: RwSignal<bool>,
    pub password_error: RwSignal<Option<ApiError>>,
    pub password_success: RwSignal<Option<String>>,
    pub update_action: Action<ProfileChanges, Result<ProfileChanges, ApiError>>,
    pub password_action: Action<ChangePasswordRequest, Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn open_edit(&self) {
        self.fields.fill_from(self.user.get_untracked().as_ref());
        self.edit_error.set(None);
        self.edit_open.set(true);
    }

    pub fn cancel_edit(&self) {
        self.edit_open.set(false);
        self.fields.fill_from(self.user.get_untracked().as_ref());
    }

    pub fn submit_edit(&self) -> bool {
        if self.update_action.pending().get_untracked() {
            return false;
        }
        self.success.set(None);
        match self.fields.snapshot().validate() {
            Ok(changes) => {
                self.edit_error.set(None);
                self.update_action.dispatch(changes);
                true
            }
            Err(err) => {
                self.edit_error.set(Some(err));
                false
            }
        }
    }

    pub fn open_password(&self) {
        self.password.clear();
        self.password_error.set(None);
        self.password_success.set(None);
        self.password_open.set(true);
    }

    pub fn cancel_password(&self) {
        self.password_open.set(false);
        self.password.clear();
        self.password_error.set(None);
        self.password_success.set(None);
    }

    /// Mismatched or missing passwords never reach the server.
    pub fn submit_password(&self) -> bool {
        if self.password_action.pending().get_untracked() {
            return false;
        }
        self.password_success.set(None);
        match self.password.snapshot().validate() {
            Ok(request) => {
                self.password_error.set(None);
                self.password_action.dispatch(request);
                true
            }
            Err(err) => {
                self.password_error.set(Some(err));
                false
            }
        }
    }
}

fn redirect_if_unauthorized(err: &ApiError) {
    if err.is_unauthorized() {
        navigation::replace(LOGIN_ROUTE);
    }
}

pub fn settle_profile_update(vm: &ProfileViewModel, result: Result<ProfileChanges, ApiError>) {
    match result {
        Ok(changes) => {
            vm.user.update(|user| {
                if let Some(user) = user.as_mut() {
                    changes.apply_to(user);
                }
            });
            vm.success.set(Some(PROFILE_UPDATED_MESSAGE.to_string()));
            vm.edit_open.set(false);
        }
        Err(err) => {
            redirect_if_unauthorized(&err);
            vm.edit_error.set(Some(err));
        }
    }
}

pub fn settle_password_change(vm: &ProfileViewModel, result: Result<(), ApiError>) {
    match result {
        Ok(()) => {
            vm.password_success
                .set(Some(PASSWORD_CHANGED_MESSAGE.to_string()));
            vm.password.clear();
            let open = vm.password_open;
            timer::run_after(PASSWORD_MODAL_CLOSE_DELAY_MS, move || open.set(false));
        }
        Err(err) => {
            redirect_if_unauthorized(&err);
            vm.password_error.set(Some(err));
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let repository = ProfileRepository::new_with_client(Rc::new(use_api_client()));

    let user = create_rw_signal(None::<User>);
    let load_error = create_rw_signal(None::<ApiError>);
    let fields = ProfileFields::new();

    let repo_for_resource = repository.clone();
    let profile_resource = create_resource(
        || 0u32,
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_me().await }
        },
    );

    create_effect(move |_| match profile_resource.get() {
        Some(Ok(me)) => {
            fields.fill_from(Some(&me));
            user.set(Some(me));
            load_error.set(None);
        }
        Some(Err(err)) => {
            redirect_if_unauthorized(&err);
            load_error.set(Some(err));
        }
        None => {}
    });

    let repo_for_update = repository.clone();
    let update_action = create_action(move |changes: &ProfileChanges| {
        let repo = repo_for_update.clone();
        let changes = changes.clone();
        async move { repo.update_me(changes.clone()).await.map(|_| changes) }
    });

    let repo_for_password = repository;
    let password_action = create_action(move |request: &ChangePasswordRequest| {
        let repo = repo_for_password.clone();
        let request = request.clone();
        async move { repo.change_password(request).await }
    });

    let vm = ProfileViewModel {
        user,
        load_error,
        profile_resource,
        fields,
        edit_open: create_rw_signal(false),
        edit_error: create_rw_signal(None),
        success: create_rw_signal(None),
        password: PasswordFields::new(),
        password_open: create_rw_signal(false),
        password_error: create_rw_signal(None),
        password_success: create_rw_signal(None),
        update_action,
        password_action,
    };

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            settle_profile_update(&vm, result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = password_action.value().get() {
            settle_password_change(&vm, result);
        }
    });

    vm
}
