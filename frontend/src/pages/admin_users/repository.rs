use super::query::{ListQuery, ListResult};
use crate::api::{ApiClient, ApiError, ProfileChanges, Role};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminUsersRepository {
    client: Rc<ApiClient>,
}

impl AdminUsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_page(&self, query: &ListQuery) -> Result<ListResult, ApiError> {
        self.client
            .list_users(query.show_inactive, &query.query_params())
            .await
            .map(ListResult::from)
    }

    pub async fn update_user(&self, id: i64, changes: ProfileChanges) -> Result<(), ApiError> {
        self.client.update_user(id, &changes).await
    }

    pub async fn replace_role(&self, id: i64, role: Role) -> Result<(), ApiError> {
        self.client.replace_roles(id, role).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}
