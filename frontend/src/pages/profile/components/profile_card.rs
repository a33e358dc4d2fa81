use crate::{
    api::User,
    components::common::{Button, ButtonVariant},
    utils::time::format_timestamp,
};
use leptos::*;

#[component]
fn ProfileRow(#[prop(into)] label: String, value: String) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row sm:items-center py-2 border-b border-border last:border-b-0">
            <dt class="w-40 text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="text-sm text-fg">{value}</dd>
        </div>
    }
}

#[component]
pub fn ProfileCard(
    user: Signal<Option<User>>,
    on_edit: Callback<()>,
    on_change_password: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            {move || {
                user.get()
                    .map(|user| {
                        view! {
                            <dl>
                                <ProfileRow label="Nome" value=user.first_name.clone()/>
                                <ProfileRow label="Sobrenome" value=user.last_name.clone()/>
                                <ProfileRow label="E-mail" value=user.email.clone()/>
                                <ProfileRow label="Permissões" value=user.roles_label()/>
                                <ProfileRow
                                    label="Primeiro acesso"
                                    value=format_timestamp(user.first_access.as_deref())
                                />
                                <ProfileRow
                                    label="Último acesso"
                                    value=format_timestamp(user.last_access.as_deref())
                                />
                            </dl>
                        }
                    })
            }}
            <div class="flex gap-2 justify-end">
                <Button variant=ButtonVariant::Secondary on_click=on_change_password>
                    "Trocar Senha"
                </Button>
                <Button on_click=on_edit>"Editar Informações"</Button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::fixture_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_profile_fields() {
        let html = render_to_string(move || {
            let mut user = fixture_user(4, "lia@example.com", "Lia", &["admin", "user"]);
            user.last_access = None;
            view! {
                <ProfileCard
                    user=Signal::derive(move || Some(user.clone()))
                    on_edit=Callback::new(|_| {})
                    on_change_password=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("lia@example.com"));
        assert!(html.contains("admin, user"));
        assert!(html.contains("Último acesso"));
        assert!(html.contains("Trocar Senha"));
    }
}
