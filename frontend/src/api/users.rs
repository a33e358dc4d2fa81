use reqwest::Method;

use super::{
    client::ApiClient,
    types::{
        ApiError, ChangePasswordRequest, PermissionsRequest, ProfileChanges, Role, User,
        UserListResponse,
    },
};

pub const ACTIVE_USERS_PATH: &str = "/users";
pub const INACTIVE_USERS_PATH: &str = "/users/inactives";

impl ApiClient {
    pub async fn list_users(
        &self,
        inactive: bool,
        params: &[(&'static str, String)],
    ) -> Result<UserListResponse, ApiError> {
        let path = if inactive {
            INACTIVE_USERS_PATH
        } else {
            ACTIVE_USERS_PATH
        };
        let builder = self.request(Method::GET, path).await.query(params);
        self.execute_json(builder, "Erro ao buscar usuários").await
    }

    pub async fn get_me(&self) -> Result<User, ApiError> {
        let builder = self.request(Method::GET, "/users/me").await;
        self.execute_json(builder, "Erro ao buscar usuário").await
    }

    pub async fn update_user(&self, id: i64, changes: &ProfileChanges) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, &format!("/users/change-user/{}", id))
            .await
            .json(changes);
        self.execute_empty(builder, "Erro ao atualizar usuário").await
    }

    pub async fn update_me(&self, changes: &ProfileChanges) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, "/users/change-user")
            .await
            .json(changes);
        self.execute_empty(builder, "Erro ao atualizar dados").await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, "/users/change-password")
            .await
            .json(request);
        self.execute_empty(builder, "Erro ao trocar senha").await
    }

    /// Replaces the whole role set with `[role]`.
    pub async fn replace_roles(&self, id: i64, role: Role) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, &format!("/users/{}/permissions", id))
            .await
            .json(&PermissionsRequest { roles: vec![role] });
        self.execute_empty(builder, "Erro ao atualizar permissão")
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let builder = self
            .request(Method::DELETE, &format!("/users/{}", id))
            .await;
        self.execute_empty(builder, "Erro ao deletar usuário").await
    }
}
