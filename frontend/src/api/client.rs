use leptos::*;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    state::session::{use_session, SessionHandle},
};

/// Thin wrapper over `reqwest` that knows the API host and the session token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionHandle,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionHandle::browser())
    }

    pub fn with_session(session: SessionHandle) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionHandle) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_host().await,
        }
    }

    /// Starts a request against `path`, attaching the bearer token when one is stored.
    pub(super) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        log::debug!("{} {}", method, path);
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => builder.header(AUTHORIZATION, value),
                Err(_) => {
                    log::warn!("Stored token is not a valid header value; sending without it");
                    builder
                }
            },
            None => builder,
        }
    }

    /// Sends the request and returns the JSON body (`Null` when empty).
    ///
    /// Non-2xx responses become [`ApiError`] built from the body's `message`
    /// or `fallback`. A 401 also clears the stored session.
    pub(super) async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        self.send(request, fallback, OnUnauthorized::ClearSession)
            .await
    }

    /// Like [`Self::execute`], but a 401 leaves the stored session alone.
    /// Used by the sign-in and sign-up calls, where 401 means bad credentials.
    pub(super) async fn execute_anonymous(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        self.send(request, fallback, OnUnauthorized::KeepSession)
            .await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        fallback: &str,
        on_unauthorized: OnUnauthorized,
    ) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(|err| {
            log::warn!("Request failed: {}", err);
            ApiError::connection()
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            log::warn!("Failed to read response body: {}", err);
            ApiError::connection()
        })?;
        let parsed = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&body).ok()
        };

        if status.is_success() {
            return Ok(parsed.unwrap_or(Value::Null));
        }

        log::warn!("Request rejected with status {}", status.as_u16());
        if status.as_u16() == 401 && on_unauthorized == OnUnauthorized::ClearSession {
            self.session.clear();
        }
        Err(ApiError::from_response_body(
            status.as_u16(),
            parsed.as_ref(),
            fallback,
        ))
    }

    pub(super) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let value = self.execute(request, fallback).await?;
        decode(value)
    }

    pub(super) async fn execute_empty(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<(), ApiError> {
        self.execute(request, fallback).await.map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    ClearSession,
    KeepSession,
}

pub(super) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| {
        log::warn!("Unexpected response shape: {}", err);
        ApiError::invalid_response("Resposta inesperada do servidor")
    })
}

pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::with_session(use_session()))
}
