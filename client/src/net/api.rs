//! REST API client for the products/spices backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `RequestError::Unavailable` since
//! requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call, no retry or timeout. Any non-2xx status becomes
//! `RequestError::Status`, carrying the backend's `{"error": ...}` text when
//! the body has one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{AuthResponse, Credentials, ErrorBody};
use crate::state::entity::{DraftOf, Entity};

/// Base address of the backend as seen from the browser. The hosting server
/// forwards this prefix to the configured backend.
pub const API_BASE: &str = "/api";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl RequestError {
    /// Build a status error, extracting the backend's message from `body`.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: backend_error_message(body) }
    }

    /// The backend's own error text, when it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn backend_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Treat any 2xx as success whatever its body holds.
fn discard_body(result: Result<String, RequestError>) -> Result<(), RequestError> {
    result.map(drop)
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// HTTP client bound to one credential.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Value of the `Authorization` header, if a credential is attached.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(bearer)
    }

    /// `GET {API_BASE}{path}`.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let body = self.send(Verb::Get, path, None).await?;
        decode(&body)
    }

    /// `POST {API_BASE}{path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let payload = serde_json::to_value(body).map_err(|e| RequestError::Decode(e.to_string()))?;
        let body = self.send(Verb::Post, path, Some(payload)).await?;
        decode(&body)
    }

    /// `PUT {API_BASE}{path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let payload = serde_json::to_value(body).map_err(|e| RequestError::Decode(e.to_string()))?;
        let body = self.send(Verb::Put, path, Some(payload)).await?;
        decode(&body)
    }

    /// `POST {API_BASE}{path}` with a JSON body. The response body is
    /// ignored, so an empty or non-JSON 2xx still succeeds.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RequestError> {
        let payload = serde_json::to_value(body).map_err(|e| RequestError::Decode(e.to_string()))?;
        discard_body(self.send(Verb::Post, path, Some(payload)).await)
    }

    /// `DELETE {API_BASE}{path}`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        discard_body(self.send(Verb::Delete, path, None).await)
    }

    async fn send(&self, verb: Verb, path: &str, payload: Option<serde_json::Value>) -> Result<String, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = endpoint(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match payload {
                Some(value) => builder.json(&value),
                None => builder.build(),
            }
            .map_err(|e| RequestError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::warn!("{verb:?} {url} failed: {e}");
                RequestError::Transport(e.to_string())
            })?;
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                log::warn!("{verb:?} {url} returned {}", resp.status());
                return Err(RequestError::from_status(resp.status(), &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, endpoint(path), payload);
            Err(RequestError::Unavailable)
        }
    }
}

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the request failure; bad credentials surface as `Status`.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, RequestError> {
    ApiClient::default().post("/auth/login", credentials).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the request failure; `backend_message()` carries the reason
/// (e.g. a duplicate email) when the backend gave one.
pub async fn register(credentials: &Credentials) -> Result<(), RequestError> {
    ApiClient::default().post_unit("/auth/register", credentials).await
}

/// CRUD surface a list view needs for one entity type.
#[allow(async_fn_in_trait)]
pub trait EntityBackend<E: Entity> {
    async fn list(&self) -> Result<Vec<E>, RequestError>;
    async fn create(&self, draft: &DraftOf<E>) -> Result<E, RequestError>;
    async fn update(&self, id: u64, draft: &DraftOf<E>) -> Result<E, RequestError>;
    async fn delete(&self, id: u64) -> Result<(), RequestError>;
}

impl<E: Entity> EntityBackend<E> for ApiClient {
    async fn list(&self) -> Result<Vec<E>, RequestError> {
        // The backend encodes an empty collection as `null`.
        let items: Option<Vec<E>> = self.get(E::PATH).await?;
        Ok(items.unwrap_or_default())
    }

    async fn create(&self, draft: &DraftOf<E>) -> Result<E, RequestError> {
        self.post(E::PATH, draft).await
    }

    async fn update(&self, id: u64, draft: &DraftOf<E>) -> Result<E, RequestError> {
        self.put(&E::item_path(id), draft).await
    }

    async fn delete(&self, id: u64) -> Result<(), RequestError> {
        ApiClient::delete(self, &E::item_path(id)).await
    }
}
