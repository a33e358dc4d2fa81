use crate::{
    api::User,
    pages::admin_users::query::{ListQuery, SortField, SortOrder},
    utils::time::format_timestamp,
};
use leptos::*;

const HEADER_CLASS: &str =
    "px-4 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider";
const SORTABLE_HEADER_CLASS: &str =
    "px-4 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider cursor-pointer select-none";

/// Arrow for the active sort column; `None` renders the faded pair.
pub fn sort_indicator(query: &ListQuery, field: SortField) -> Option<&'static str> {
    (query.sort_by == field).then_some(match query.order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    })
}

#[component]
fn SortableHeader(
    label: &'static str,
    field: SortField,
    query: Signal<ListQuery>,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    view! {
        <th class=SORTABLE_HEADER_CLASS on:click=move |_| on_sort.call(field)>
            {label}
            <span class="inline-block ml-1 align-middle">
                {move || match sort_indicator(&query.get(), field) {
                    Some(arrow) => arrow.into_view(),
                    None => view! { <span class="opacity-30">"▲▼"</span> }.into_view(),
                }}
            </span>
        </th>
    }
}

#[component]
pub fn UsersList(
    users: Signal<Vec<User>>,
    query: Signal<ListQuery>,
    on_sort: Callback<SortField>,
    on_edit: Callback<User>,
    on_delete: Callback<User>,
) -> impl IntoView {
    let show_inactive = Signal::derive(move || query.with(|q| q.show_inactive));

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=HEADER_CLASS>"ID"</th>
                        <th class=HEADER_CLASS>"E-MAIL"</th>
                        <SortableHeader label="NOME" field=SortField::FirstName query=query on_sort=on_sort/>
                        <th class=HEADER_CLASS>"SOBRENOME"</th>
                        <th class=HEADER_CLASS>"PERFIS"</th>
                        <SortableHeader label="DATA DE CRIAÇÃO" field=SortField::CreatedAt query=query on_sort=on_sort/>
                        <th class=HEADER_CLASS>"PRIMEIRO ACESSO"</th>
                        <th class=HEADER_CLASS>"ÚLTIMO ACESSO"</th>
                        <th class=HEADER_CLASS>"AÇÕES"</th>
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <Show when=move || users.with(|u| u.is_empty())>
                        <tr>
                            <td colspan="9" class="px-4 py-6 text-center text-sm text-fg-muted">
                                "Nenhum usuário encontrado."
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || users.get()
                        key=|user| (user.id, user.email.clone(), user.first_name.clone(), user.last_name.clone(), user.roles.clone())
                        children=move |user: User| {
                            let edit_user = user.clone();
                            let delete_user = user.clone();
                            view! {
                                <tr class=move || if show_inactive.get() { "bg-status-error-bg" } else { "hover:bg-surface-muted" }>
                                    <td class="px-4 py-2 text-sm text-fg">{user.id}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{user.email.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{user.first_name.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{user.last_name.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{user.roles_label()}</td>
                                    <td class=move || {
                                        if show_inactive.get() {
                                            "px-4 py-2 text-sm text-status-error-text font-bold"
                                        } else {
                                            "px-4 py-2 text-sm text-fg"
                                        }
                                    }>
                                        {format_timestamp(user.created_at.as_deref())}
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_timestamp(user.first_access.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_timestamp(user.last_access.as_deref())}</td>
                                    <td class="px-4 py-2 flex gap-2">
                                        <button
                                            type="button"
                                            class="p-1 rounded text-action-primary-bg hover:bg-action-ghost-bg-hover"
                                            title="Editar usuário"
                                            on:click=move |_| on_edit.call(edit_user.clone())
                                        >
                                            <i class="fas fa-pen-to-square"></i>
                                        </button>
                                        <button
                                            type="button"
                                            class="p-1 rounded text-action-danger-bg hover:bg-status-error-bg"
                                            title="Excluir usuário"
                                            on:click=move |_| on_delete.call(delete_user.clone())
                                        >
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
