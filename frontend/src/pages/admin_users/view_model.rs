use super::{
    query::{ListQuery, ListResult},
    repository::AdminUsersRepository,
    sequence::RequestSequence,
    table::{UsersMutation, UsersTable},
    utils::MessageState,
};
use crate::{
    api::{use_api_client, ApiError, ProfileChanges, Role, User},
    router::LOGIN_ROUTE,
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub query: RwSignal<ListQuery>,
    pub name_draft: RwSignal<String>,
    pub role_draft: RwSignal<String>,
    pub table: RwSignal<UsersTable>,
    pub loading: RwSignal<bool>,
    pub list_error: RwSignal<Option<ApiError>>,
    pub messages: RwSignal<MessageState>,
    pub delete_target: RwSignal<Option<User>>,
    pub edit_target: RwSignal<Option<User>>,
    pub role_target: RwSignal<Option<User>>,
    pub total_pages: Memo<u32>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
    pub update_action: Action<(i64, ProfileChanges), Result<(i64, ProfileChanges), ApiError>>,
    pub role_action: Action<(i64, Role), Result<(i64, Role), ApiError>>,
}

impl AdminUsersViewModel {
    /// Moves the filter drafts into the query.
    pub fn submit_filters(&self) {
        let name = self.name_draft.get_untracked();
        let role = super::utils::parse_role_filter(&self.role_draft.get_untracked());
        self.query.update(|q| q.apply_filters(&name, role));
    }

    /// Writes the query only for an accepted size, so a rejected choice
    /// never refetches.
    pub fn change_page_size(&self, size: u32) -> bool {
        let mut next = self.query.get_untracked();
        if !next.set_page_size(size) {
            return false;
        }
        self.query.set(next);
        true
    }
}

/// Fetches one page and reports `None` when a newer fetch was issued while
/// this one was in flight.
pub async fn load_page(
    repo: &AdminUsersRepository,
    sequence: &RequestSequence,
    ticket: u64,
    query: &ListQuery,
) -> Option<Result<ListResult, ApiError>> {
    let result = repo.fetch_page(query).await;
    if sequence.is_latest(ticket) {
        Some(result)
    } else {
        log::debug!("Discarding stale user list response (ticket {})", ticket);
        None
    }
}

/// Applies a fetch outcome. Failures keep the previous rows on screen.
pub fn settle_page(
    result: Result<ListResult, ApiError>,
    query: RwSignal<ListQuery>,
    table: RwSignal<UsersTable>,
    list_error: RwSignal<Option<ApiError>>,
) {
    match result {
        Ok(page) => {
            let (page_index, page_size) = (page.page_index, page.page_size);
            table.update(|t| t.replace_page(page));
            list_error.set(None);
            let mut current = query.get_untracked();
            if current.reconcile(page_index, page_size) {
                query.set(current);
            }
        }
        Err(err) => {
            if err.is_unauthorized() {
                navigation::replace(LOGIN_ROUTE);
            }
            list_error.set(Some(err));
        }
    }
}

/// Applies a mutation outcome to the table and the banner.
pub fn settle_mutation(
    result: Result<UsersMutation, ApiError>,
    success_message: &str,
    table: RwSignal<UsersTable>,
    messages: RwSignal<MessageState>,
) -> bool {
    match result {
        Ok(mutation) => {
            table.update(|t| {
                if !t.apply(mutation) {
                    log::debug!("Mutated user is no longer on this page");
                }
            });
            messages.update(|m| m.set_success(success_message));
            true
        }
        Err(err) => {
            if err.is_unauthorized() {
                navigation::replace(LOGIN_ROUTE);
            }
            messages.update(|m| m.set_error(err.error));
            false
        }
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let repository = AdminUsersRepository::new_with_client(Rc::new(use_api_client()));

    let query = create_rw_signal(ListQuery::default());
    let name_draft = create_rw_signal(String::new());
    let role_draft = create_rw_signal(String::new());
    let table = create_rw_signal(UsersTable::default());
    let loading = create_rw_signal(false);
    let list_error = create_rw_signal(None::<ApiError>);
    let messages = create_rw_signal(MessageState::default());
    let delete_target = create_rw_signal(None::<User>);
    let edit_target = create_rw_signal(None::<User>);
    let role_target = create_rw_signal(None::<User>);
    let total_pages = create_memo(move |_| {
        super::query::total_pages(
            table.with(|t| t.total_count),
            query.with(|q| q.page_size),
        )
    });

    let sequence = RequestSequence::default();
    let repo_for_list = repository.clone();
    create_effect(move |_| {
        let current = query.get();
        let ticket = sequence.issue();
        let repo = repo_for_list.clone();
        let sequence = sequence.clone();
        loading.set(true);
        spawn_local(async move {
            if let Some(result) = load_page(&repo, &sequence, ticket, &current).await {
                settle_page(result, query, table, list_error);
                loading.set(false);
            }
        });
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_user(id).await.map(|_| id) }
    });

    let repo_for_update = repository.clone();
    let update_action = create_action(move |(id, changes): &(i64, ProfileChanges)| {
        let repo = repo_for_update.clone();
        let (id, changes) = (*id, changes.clone());
        async move {
            repo.update_user(id, changes.clone())
                .await
                .map(|_| (id, changes))
        }
    });

    let repo_for_role = repository;
    let role_action = create_action(move |(id, role): &(i64, Role)| {
        let repo = repo_for_role.clone();
        let (id, role) = (*id, *role);
        async move { repo.replace_role(id, role).await.map(|_| (id, role)) }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            let done = settle_mutation(
                result.map(|id| UsersMutation::Removed { id }),
                "Usuário excluído com sucesso!",
                table,
                messages,
            );
            if done {
                delete_target.set(None);
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            let done = settle_mutation(
                result.map(|(id, changes)| UsersMutation::ProfileEdited { id, changes }),
                "Usuário atualizado com sucesso!",
                table,
                messages,
            );
            if done {
                edit_target.set(None);
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = role_action.value().get() {
            let done = settle_mutation(
                result.map(|(id, role)| UsersMutation::RolesReplaced { id, role }),
                "Permissão atualizada com sucesso!",
                table,
                messages,
            );
            if done {
                role_target.set(None);
            }
        }
    });

    AdminUsersViewModel {
        query,
        name_draft,
        role_draft,
        table,
        loading,
        list_error,
        messages,
        delete_target,
        edit_target,
        role_target,
        total_pages,
        delete_action,
        update_action,
        role_action,
    }
}
