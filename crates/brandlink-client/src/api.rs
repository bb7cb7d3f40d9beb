//! Shared HTTP plumbing for the brandlink REST API.
//!
//! [`ApiClient`] owns the `reqwest` client, base URL and caller identity. It
//! is built once and handed to every service behind an `Arc`. Responses are
//! unwrapped from the `{data, meta}` envelope; failures of any kind come back
//! as a [`ClientError`].

use std::time::Duration;

use brandlink_core::{AppConfig, UserRole};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ClientError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The signed-in user on whose behalf requests are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    actor: Option<Actor>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:3000/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("brandlink-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // One trailing slash so `Url::join` appends instead of replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            token: None,
            actor: None,
        })
    }

    /// Builds a client from loaded application config, including the bearer
    /// token when one is configured.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let client = Self::new(&config.api_base_url, config.request_timeout_secs)?;
        Ok(match &config.api_token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn actor(&self) -> Option<Actor> {
        self.actor
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(actor) = self.actor {
            builder = builder
                .header(USER_ID_HEADER, actor.user_id.to_string())
                .header(USER_ROLE_HEADER, actor.role.as_str());
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url), path).await
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url).query(query), path)
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::POST, url).json(body), path)
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::PUT, url).json(body), path)
            .await
    }

    /// `DELETE`; the response body is not inspected on success.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path)?;
        let response = self.request(Method::DELETE, url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(handle_api_error(status.as_u16(), &body))
    }

    /// Uploads one file as the `file` field of a multipart form.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ClientError> {
        let url = self.url(path)?;
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = Form::new().part("file", part);
        self.send(self.request(Method::POST, url).multipart(form), path)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = handle_api_error(status.as_u16(), &body);
            tracing::debug!(
                path = context,
                status = status.as_u16(),
                error = %err,
                "api call failed"
            );
            return Err(err);
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;
        Ok(envelope.data)
    }
}

/// Turns a failed response into [`ClientError::Api`], pulling the most
/// specific message the body offers.
///
/// Looks at `error.message`, then a top-level `message` (string, or array
/// joined with `"; "`), then `error` as a plain string. Falls back to
/// `"Request failed with status <code>"`.
#[must_use]
pub fn handle_api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| extract_message(&v))
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ClientError::Api { status, message }
}

fn extract_message(body: &Value) -> Option<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    if let Some(msg) = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .and_then(non_empty)
    {
        return Some(msg);
    }

    match body.get("message") {
        Some(Value::String(s)) => {
            if let Some(msg) = non_empty(s.as_str()) {
                return Some(msg);
            }
        }
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if !parts.is_empty() {
                return Some(parts.join("; "));
            }
        }
        _ => {}
    }

    body.get("error")
        .and_then(Value::as_str)
        .and_then(non_empty)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
