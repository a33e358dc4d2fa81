use crate::api::{ApiClient, ApiError, SignUpRequest, SignUpResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    client: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, ApiError> {
        self.client.sign_up(&request).await
    }
}
