use super::view_model::use_register_view_model;
use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::TextField,
        layout::{AuthCard, SuccessMessage},
    },
    router::LOGIN_ROUTE,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.register_action.pending();

    view! {
        <AuthCard title="Cadastro de usuário">
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <InlineErrorMessage error=vm.error.into() />
                <TextField id="first-name" label="Nome" value=vm.first_name/>
                <TextField id="last-name" label="Sobrenome" value=vm.last_name/>
                <TextField id="email" label="Email" value=vm.email input_type="email"/>
                <TextField id="password" label="Senha" value=vm.password input_type="password" autocomplete="new-password"/>
                <TextField id="confirm-password" label="Confirme sua senha" value=vm.confirm_password input_type="password" autocomplete="new-password"/>
                <div class="text-sm">
                    <a href=LOGIN_ROUTE class="text-action-primary-bg hover:underline">"Já tem uma conta? Faça login"</a>
                </div>
                {move || vm.success.get().map(|message| view! { <SuccessMessage message=message/> })}
                <Button kind="submit" class="w-full" loading=Signal::derive(move || pending.get())>
                    "Cadastrar"
                </Button>
            </form>
        </AuthCard>
    }
}
