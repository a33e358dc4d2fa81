use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::Modal, error::InlineErrorMessage, forms::TextField,
        layout::SuccessMessage,
    },
    pages::profile::view_model::PasswordFields,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn PasswordModal(
    is_open: Signal<bool>,
    fields: PasswordFields,
    error: Signal<Option<ApiError>>,
    success: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <Modal is_open=is_open title="Trocar Senha" on_close=on_close>
            <form class="flex flex-col gap-4" on:submit=submit>
                <InlineErrorMessage error=error/>
                {move || success.get().map(|message| view! { <SuccessMessage message=message/> })}
                <TextField
                    id="current-password"
                    label="Senha atual"
                    value=fields.current
                    input_type="password"
                    placeholder="Senha atual"
                    autocomplete="current-password"
                />
                <TextField
                    id="new-password"
                    label="Nova senha"
                    value=fields.new
                    input_type="password"
                    placeholder="Nova senha"
                    autocomplete="new-password"
                />
                <TextField
                    id="confirm-password"
                    label="Confirme a nova senha"
                    value=fields.confirm
                    input_type="password"
                    placeholder="Confirme a nova senha"
                    autocomplete="new-password"
                />
                <div class="flex justify-end gap-2 mt-2">
                    <Button variant=ButtonVariant::Secondary on_click=on_close>
                        "Cancelar"
                    </Button>
                    <Button kind="submit" loading=pending>
                        "Alterar senha"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
