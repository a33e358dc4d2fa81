use super::{
    components::{
        edit_role_modal::EditRoleModal, edit_user_modal::EditUserModal, filter::UsersFilter,
        list::UsersList, pagination::Pagination,
    },
    view_model::{use_admin_users_view_model, AdminUsersViewModel},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
};
use crate::components::error::InlineErrorMessage;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let vm = use_admin_users_view_model();
    view! {
        <Title text="Usuários"/>
        <Layout title="Usuários" subtitle="Listagem">
            <AdminUsersPanel vm=vm/>
        </Layout>
    }
}

#[component]
pub fn AdminUsersPanel(vm: AdminUsersViewModel) -> impl IntoView {
    let query = Signal::derive(move || vm.query.get());
    let users = Signal::derive(move || vm.table.with(|t| t.users.clone()));
    let total_count = Signal::derive(move || vm.table.with(|t| t.total_count));
    let success = Signal::derive(move || vm.messages.with(|m| m.success.clone()));
    let failure = Signal::derive(move || vm.messages.with(|m| m.error.clone()));

    let delete_open = Signal::derive(move || vm.delete_target.with(|t| t.is_some()));
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .with(|t| t.as_ref().map(|u| u.email.clone()))
            .map(|email| format!("Tem certeza que deseja excluir o usuário {}?", email))
            .unwrap_or_default()
    });

    let on_confirm_delete = Callback::new(move |_| {
        if vm.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(target) = vm.delete_target.get_untracked() {
            vm.messages.update(|m| m.clear());
            vm.delete_action.dispatch(target.id);
        }
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 space-y-4">
            <UsersFilter
                name_draft=vm.name_draft
                role_draft=vm.role_draft
                show_inactive=Signal::derive(move || query.with(|q| q.show_inactive))
                on_submit=Callback::new(move |_| vm.submit_filters())
                on_toggle_inactive=Callback::new(move |_| vm.query.update(|q| q.toggle_inactive()))
            />

            {move || success.get().map(|message| view! { <SuccessMessage message=message/> })}
            {move || failure.get().map(|message| view! { <ErrorMessage message=message/> })}

            <div class="text-fg-muted text-sm">
                {move || format!("Total de registros encontrados: {}", total_count.get())}
            </div>

            <div class="bg-surface-elevated rounded shadow p-2 space-y-2">
                <InlineErrorMessage error=vm.list_error.into()/>
                <Show when=move || vm.loading.get()>
                    <LoadingSpinner/>
                </Show>
                <UsersList
                    users=users
                    query=query
                    on_sort=Callback::new(move |field| vm.query.update(|q| q.toggle_sort(field)))
                    on_edit=Callback::new(move |user| vm.edit_target.set(Some(user)))
                    on_delete=Callback::new(move |user| vm.delete_target.set(Some(user)))
                />
                <Pagination
                    page_index=Signal::derive(move || query.with(|q| q.page_index))
                    page_size=Signal::derive(move || query.with(|q| q.page_size))
                    rows=Signal::derive(move || users.with(|u| u.len()))
                    total_count=total_count
                    total_pages=vm.total_pages.into()
                    on_page_size=Callback::new(move |size| {
                        vm.change_page_size(size);
                    })
                    on_previous=Callback::new(move |_| vm.query.update(|q| q.previous_page()))
                    on_next=Callback::new(move |_| {
                        let pages = vm.total_pages.get_untracked();
                        vm.query.update(|q| q.next_page(pages));
                    })
                />
            </div>

            <ConfirmDialog
                is_open=delete_open
                title="Confirmar deleção"
                message=delete_message
                confirm_label="Excluir"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
            />
            <EditUserModal
                user=vm.edit_target.into()
                pending=Signal::derive(move || vm.update_action.pending().get())
                on_save=Callback::new(move |payload| {
                    vm.messages.update(|m| m.clear());
                    vm.update_action.dispatch(payload);
                })
                on_change_role=Callback::new(move |user| {
                    vm.edit_target.set(None);
                    vm.role_target.set(Some(user));
                })
                on_close=Callback::new(move |_| vm.edit_target.set(None))
            />
            <EditRoleModal
                user=vm.role_target.into()
                pending=Signal::derive(move || vm.role_action.pending().get())
                on_save=Callback::new(move |payload| {
                    vm.messages.update(|m| m.clear());
                    vm.role_action.dispatch(payload);
                })
                on_close=Callback::new(move |_| vm.role_target.set(None))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::pages::admin_users::table::UsersTable;
    use crate::state::session::{provide_session, SessionHandle};
    use crate::test_support::helpers::fixture_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_rows_counter_and_pagination() {
        let html = render_to_string(move || {
            provide_session(SessionHandle::in_memory());
            let vm = use_admin_users_view_model();
            vm.table.set(UsersTable {
                users: vec![
                    fixture_user(1, "ana@example.com", "Ana", &["admin"]),
                    fixture_user(2, "bia@example.com", "Bia", &["user"]),
                ],
                total_count: 12,
            });
            view! { <AdminUsersPanel vm=vm/> }
        });
        assert!(html.contains("Total de registros encontrados: 12"));
        assert!(html.contains("ana@example.com"));
        assert!(html.contains("Exibindo 1 - 2 de 12 usuários"));
        assert!(html.contains("Página 1 de 2"));
        assert!(!html.contains("Confirmar deleção"));
    }

    #[test]
    fn delete_target_opens_confirmation() {
        let html = render_to_string(move || {
            provide_session(SessionHandle::in_memory());
            let vm = use_admin_users_view_model();
            vm.delete_target
                .set(Some(fixture_user(2, "bia@example.com", "Bia", &["user"])));
            view! { <AdminUsersPanel vm=vm/> }
        });
        assert!(html.contains("Confirmar deleção"));
        assert!(html.contains("Tem certeza que deseja excluir o usuário bia@example.com?"));
        assert!(html.contains("Excluir"));
    }

    #[test]
    fn list_error_is_shown_above_kept_rows() {
        let html = render_to_string(move || {
            provide_session(SessionHandle::in_memory());
            let vm = use_admin_users_view_model();
            vm.table.set(UsersTable {
                users: vec![fixture_user(1, "ana@example.com", "Ana", &["admin"])],
                total_count: 1,
            });
            vm.list_error
                .set(Some(ApiError::request_failed("Erro ao buscar usuários")));
            view! { <AdminUsersPanel vm=vm/> }
        });
        assert!(html.contains("Erro ao buscar usuários"));
        assert!(html.contains("ana@example.com"));
    }
}
