//! The authenticated HTTP client.

use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::envelope::Envelope;
use crate::api::error::ApiError;
use crate::config::Config;
use crate::session::SessionStore;

/// Path prefix every endpoint lives under.
const API_ROOT: &str = "dev-api/app";

/// One shared client for the whole app.
///
/// Adds the bearer token from the session (when present) and a fresh
/// `X-Request-Id` to every request, enforces the configured deadlines,
/// and unwraps the response envelope. When any response comes back
/// unauthorized the `on_unauthorized` hook fires, once per failed
/// request, so the UI can drop to the login screen.
pub struct ApiClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
    session: SessionStore,
    on_unauthorized: Box<dyn Fn() + Send + Sync>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        session: SessionStore,
        on_unauthorized: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.server.connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.server.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            session,
            on_unauthorized: Box::new(on_unauthorized),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(path, builder).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(path, builder).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::PUT, path).json(body);
        self.execute(path, builder).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::DELETE, path);
        self.execute(path, builder).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}/{}", self.base_url, API_ROOT, path);
        let mut builder = self
            .http
            .request(method, url)
            .header("X-Request-Id", Uuid::new_v4().to_string());
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let started = Instant::now();
        let result = match timeout(self.request_timeout, Self::execute_inner(builder)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::debug!(path, elapsed_ms, "api request ok"),
            Err(err) => {
                tracing::warn!(path, elapsed_ms, kind = err.kind(), "api request failed: {err}");
                if err.is_unauthorized() {
                    (self.on_unauthorized)();
                }
            }
        }
        result
    }

    async fn execute_inner<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = builder.send().await?;
        // Gateways in front of the server answer with a bare 401 and no
        // envelope, so treat the transport status the same as code 401.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized {
                message: "Session expired".to_string(),
            });
        }
        let envelope: Envelope<T> = response.json().await?;
        envelope.into_result()
    }
}
