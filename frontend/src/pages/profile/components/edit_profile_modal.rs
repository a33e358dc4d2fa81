use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant}, confirm_dialog::Modal, error::InlineErrorMessage, forms::TextField,
    },
    pages::profile::view_model::ProfileFields,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditProfileModal(
    is_open: Signal<bool>,
    fields: ProfileFields,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <Modal is_open=is_open title="Editar Informações" on_close=on_close>
            <form class="flex flex-col gap-4" on:submit=submit>
                <InlineErrorMessage error=error/>
                <TextField id="profile-first-name" label="Nome" value=fields.first_name/>
                <TextField id="profile-last-name" label="Sobrenome" value=fields.last_name/>
                <TextField
                    id="profile-email"
                    label="E-mail"
                    value=fields.email
                    input_type="email"
                    autocomplete="email"
                />
                <div class="flex justify-end gap-2 mt-2">
                    <Button variant=ButtonVariant::Secondary on_click=on_close>
                        "Cancelar"
                    </Button>
                    <Button kind="submit" loading=pending>
                        {move || if pending.get() { "Salvando..." } else { "Salvar" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
