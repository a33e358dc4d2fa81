use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse},
};

impl ApiClient {
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/signin")
            .await
            .json(request);
        let value = self.execute_anonymous(builder, "Erro no login").await?;
        super::client::decode(value)
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/signup")
            .await
            .json(request);
        let value = self.execute_anonymous(builder, "Erro no cadastro").await?;
        // Some deployments answer with the created user instead of a message.
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}
