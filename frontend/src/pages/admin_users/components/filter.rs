use crate::{
    api::Role,
    components::forms::{SelectField, TextField},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn UsersFilter(
    name_draft: RwSignal<String>,
    role_draft: RwSignal<String>,
    show_inactive: Signal<bool>,
    on_submit: Callback<()>,
    on_toggle_inactive: Callback<()>,
) -> impl IntoView {
    let role_options: Vec<(&'static str, &'static str)> =
        Role::ALL.iter().map(|role| (role.as_str(), role.label())).collect();

    view! {
        <form
            class="flex flex-wrap gap-4 items-end mb-4"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <div class="flex-1 min-w-[180px]">
                <TextField id="filter-name" label="Nome" value=name_draft/>
            </div>
            <div class="flex-1 min-w-[180px]">
                <SelectField
                    id="filter-role"
                    label="Papel"
                    value=role_draft
                    options=role_options
                    placeholder="Nenhum"
                />
            </div>
            <div class="flex gap-2">
                <button
                    type="submit"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    "Buscar"
                </button>
                <button
                    type="button"
                    class=move || {
                        format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border {}",
                            if show_inactive.get() { "bg-surface-muted text-fg" } else { "bg-surface-elevated text-fg" },
                        )
                    }
                    on:click=move |_| on_toggle_inactive.call(())
                >
                    {move || inactive_toggle_label(show_inactive.get())}
                </button>
            </div>
        </form>
    }
}

fn inactive_toggle_label(show_inactive: bool) -> &'static str {
    if show_inactive {
        "Usuários"
    } else {
        "Usuários Inativos"
    }
}
