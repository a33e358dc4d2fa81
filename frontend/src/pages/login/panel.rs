use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    view! {
        <LoginForm
            form=vm.form
            error=vm.error.into()
            pending=pending.into()
            on_submit=Callback::new(move |_| {
                vm.submit();
            })
        />
    }
}
