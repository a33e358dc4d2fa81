use crate::{
    api::ApiError,
    components::{common::Button, error::InlineErrorMessage, forms::TextField, layout::AuthCard},
    pages::login::utils::LoginFormState,
    router::REGISTER_ROUTE,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <AuthCard title="Login">
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <InlineErrorMessage error=error />
                <TextField id="email" label="Email" value=form.email input_type="email" autocomplete="username"/>
                <TextField id="password" label="Senha" value=form.password input_type="password" autocomplete="current-password"/>
                <div class="flex justify-between text-sm">
                    <a href=REGISTER_ROUTE class="text-action-primary-bg hover:underline">"Criar conta"</a>
                </div>
                <Button kind="submit" class="w-full" loading=pending>
                    {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                </Button>
            </form>
        </AuthCard>
    }
}
