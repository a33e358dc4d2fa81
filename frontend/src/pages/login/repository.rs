use crate::api::{ApiClient, ApiError, SignInRequest, SignInResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, ApiError> {
        self.client.sign_in(&request).await
    }
}
