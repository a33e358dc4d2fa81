use crate::{
    api::{ApiError, Role, User},
    components::{confirm_dialog::Modal, error::InlineErrorMessage, forms::SelectField},
    pages::admin_users::utils::parse_role_choice,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditRoleModal(
    user: Signal<Option<User>>,
    pending: Signal<bool>,
    on_save: Callback<(i64, Role)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let choice = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    create_render_effect(move |_| {
        let current = user
            .get()
            .and_then(|u| u.primary_role())
            .map(|role| role.as_str().to_string())
            .unwrap_or_default();
        choice.set(current);
        error.set(None);
    });

    let is_open = Signal::derive(move || user.with(|u| u.is_some()));
    let options: Vec<(&'static str, &'static str)> =
        Role::ALL.iter().map(|role| (role.as_str(), role.label())).collect();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(target) = user.get_untracked() else {
            return;
        };
        match parse_role_choice(&choice.get_untracked()) {
            Ok(role) => {
                error.set(None);
                on_save.call((target.id, role));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <Modal is_open=is_open title="Alterar Permissão" on_close=on_close>
            <form class="flex flex-col gap-4" on:submit=submit>
                <SelectField
                    id="edit-role"
                    label="Selecione o novo papel"
                    value=choice
                    options=options.clone()
                    placeholder="Selecione..."
                />
                <InlineErrorMessage error=error.into()/>
                <div class="flex justify-end gap-2 mt-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "Salvar"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
