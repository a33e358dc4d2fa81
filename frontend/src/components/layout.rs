use crate::{components::guard::use_granted_claims, state::auth::use_logout};
use leptos::*;

#[component]
pub fn Header(
    #[prop(into)] main_text: MaybeSignal<String>,
    #[prop(optional, into)] secondary_text: MaybeSignal<String>,
) -> impl IntoView {
    let logout = use_logout();
    let signed_in_as = use_granted_claims().and_then(|claims| claims.display_name());
    let secondary = Signal::derive(move || secondary_text.get());
    let has_secondary = move || !secondary.get().trim().is_empty();

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex flex-col">
                        <h1 class="text-xl font-semibold text-fg">{move || main_text.get()}</h1>
                        <Show when=has_secondary>
                            <span class="text-sm text-fg-muted">{move || secondary.get()}</span>
                        </Show>
                    </div>
                    <div class="flex items-center gap-3">
                        {signed_in_as.map(|name| view! { <span class="text-sm text-fg-muted">{name}</span> })}
                        <button
                            type="button"
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=move |_| logout.call(())
                        >
                            "Sair"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] subtitle: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header main_text=title secondary_text=subtitle/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

/// Centered card used by the signed-out pages.
#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-8 space-y-6">
                <h2 class="text-2xl font-bold text-fg text-center">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}
