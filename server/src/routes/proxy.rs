//! Forwarding of `/api/*` requests to the upstream REST backend.
//!
//! The browser addresses a fixed `/api` prefix on this origin; each request is
//! replayed against `BACKEND_URL` with the prefix replaced. Only the headers
//! the REST API reads are passed through.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

const API_PREFIX: &str = "/api";
const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Build the upstream URL for a request path (with the `/api` prefix) and
/// optional query string.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let mut url = format!("{}{rest}", backend_url.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Whether a request header is passed to the upstream.
pub fn forwards_header(name: &HeaderName) -> bool {
    FORWARDED_HEADERS.contains(name)
}

fn backend_unavailable() -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "error": "backend unavailable" }))).into_response()
}

/// Replay the request upstream and relay status, content type, and body.
pub async fn forward(State(state): State<AppState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let url = upstream_url(&state.backend_url, uri.path(), uri.query());

    let mut request = state.http.request(method.clone(), &url);
    for (name, value) in headers.iter().filter(|(name, _)| forwards_header(name)) {
        request = request.header(name, value);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return backend_unavailable();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            return backend_unavailable();
        }
    };

    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
