use super::{
    components::{
        edit_profile_modal::EditProfileModal, password_modal::PasswordModal,
        profile_card::ProfileCard,
    },
    view_model::{use_profile_view_model, ProfileViewModel},
};
use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, SuccessMessage},
};
use leptos::*;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <Layout title="Meu" subtitle="Perfil">
            <ProfileContent vm=vm/>
        </Layout>
    }
}

#[component]
fn ProfileContent(vm: ProfileViewModel) -> impl IntoView {
    let user = Signal::derive(move || vm.user.get());
    let loading = Signal::derive(move || vm.profile_resource.loading().get());
    let load_error = Signal::derive(move || vm.load_error.get());

    view! {
        <div class="max-w-3xl mx-auto px-4 space-y-4">
            <InlineErrorMessage error=load_error/>
            {move || vm.success.get().map(|message| view! { <SuccessMessage message=message/> })}
            <Show
                when=move || !loading.get() || user.with(|u| u.is_some())
                fallback=|| view! { <LoadingSpinner/> }
            >
                <ProfileCard
                    user=user
                    on_edit=Callback::new(move |_| vm.open_edit())
                    on_change_password=Callback::new(move |_| vm.open_password())
                />
            </Show>
            <EditProfileModal
                is_open=Signal::derive(move || vm.edit_open.get())
                fields=vm.fields
                error=Signal::derive(move || vm.edit_error.get())
                pending=Signal::derive(move || vm.update_action.pending().get())
                on_submit=Callback::new(move |_| {
                    vm.submit_edit();
                })
                on_close=Callback::new(move |_| vm.cancel_edit())
            />
            <PasswordModal
                is_open=Signal::derive(move || vm.password_open.get())
                fields=vm.password
                error=Signal::derive(move || vm.password_error.get())
                success=Signal::derive(move || vm.password_success.get())
                pending=Signal::derive(move || vm.password_action.pending().get())
                on_submit=Callback::new(move |_| {
                    vm.submit_password();
                })
                on_close=Callback::new(move |_| vm.cancel_password())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{provide_session, SessionHandle};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_layout_headings() {
        let html = render_to_string(move || {
            provide_session(SessionHandle::in_memory());
            view! { <ProfilePanel/> }
        });
        assert!(html.contains("Meu"));
        assert!(html.contains("Perfil"));
        assert!(html.contains("Sair"));
    }
}
