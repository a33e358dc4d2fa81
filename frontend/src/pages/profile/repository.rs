use crate::api::{ApiClient, ApiError, ChangePasswordRequest, ProfileChanges, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        self.client.get_me().await
    }

    pub async fn update_me(&self, changes: ProfileChanges) -> Result<(), ApiError> {
        self.client.update_me(&changes).await
    }

    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), ApiError> {
        self.client.change_password(&request).await
    }
}
