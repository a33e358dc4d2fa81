use crate::{
    api::{ProfileChanges, User},
    components::{confirm_dialog::Modal, forms::TextField},
    pages::admin_users::utils::UserEditForm,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditUserModal(
    user: Signal<Option<User>>,
    pending: Signal<bool>,
    on_save: Callback<(i64, ProfileChanges)>,
    on_change_role: Callback<User>,
    on_close: Callback<()>,
) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());

    // Refill the drafts whenever a different user is opened.
    create_render_effect(move |_| {
        let form = user
            .get()
            .as_ref()
            .map(UserEditForm::from_user)
            .unwrap_or_default();
        email.set(form.email);
        first_name.set(form.first_name);
        last_name.set(form.last_name);
    });

    let is_open = Signal::derive(move || user.with(|u| u.is_some()));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(target) = user.get_untracked() else {
            return;
        };
        let form = UserEditForm {
            email: email.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        on_save.call((target.id, form.to_changes(&target)));
    };

    let change_role = move |_| {
        if let Some(target) = user.get_untracked() {
            on_change_role.call(target);
        }
    };

    view! {
        <Modal is_open=is_open title="Editar Usuário" on_close=on_close>
            <form class="flex flex-col gap-4" on:submit=submit>
                <TextField id="edit-first-name" label="Nome" value=first_name/>
                <TextField id="edit-last-name" label="Sobrenome" value=last_name/>
                <TextField id="edit-email" label="E-mail" value=email input_type="email"/>
                <div class="flex justify-between items-center mt-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancelar"
                    </button>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded border border-action-primary-bg text-action-primary-bg hover:bg-action-ghost-bg-hover"
                            on:click=change_role
                        >
                            "Alterar Permissão"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            "Salvar"
                        </button>
                    </div>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::fixture_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_prefilled_form_with_role_shortcut() {
        let html = render_to_string(move || {
            let user = fixture_user(3, "caio@example.com", "Caio", &["user"]);
            view! {
                <EditUserModal
                    user=Signal::derive(move || Some(user.clone()))
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_change_role=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Editar Usuário"));
        assert!(html.contains("Alterar Permissão"));
        assert!(html.contains("Sobrenome"));
    }

    #[test]
    fn hidden_without_target() {
        let html = render_to_string(move || {
            view! {
                <EditUserModal
                    user=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_change_role=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Editar Usuário"));
    }
}
