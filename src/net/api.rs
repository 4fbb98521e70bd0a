//! REST transport for the auth API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: [`GlooTransport`] reports `AuthError::Unavailable`
//! and callers substitute their own [`AuthTransport`].
//!
//! ERROR HANDLING
//! ==============
//! The transport returns the body for any HTTP status. The auth API answers
//! rejections with a JSON body and a 4xx status, so status alone never decides
//! the outcome; [`decode`] does, and reports non-JSON bodies as errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AuthError;

/// Raw HTTP reply: status plus unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Seam between the controller and the network.
///
/// Futures are not `Send`; the browser runs them on `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// `POST url` with a JSON body and `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, AuthError>;

    /// `GET url` with `Authorization: Bearer <token>`.
    async fn get_authorized(&self, url: &str, token: &str) -> Result<HttpReply, AuthError>;
}

/// Serialize a request body for [`AuthTransport::post_json`].
///
/// # Errors
///
/// Returns `Transport` if the body cannot be represented as JSON.
pub fn encode<T: Serialize>(body: &T) -> Result<serde_json::Value, AuthError> {
    serde_json::to_value(body).map_err(|e| AuthError::Transport(e.to_string()))
}

/// Parse a reply body as JSON regardless of status.
///
/// # Errors
///
/// Returns `Decode` with the reply status when the body is not valid JSON
/// for `T`.
pub fn decode<T: DeserializeOwned>(reply: &HttpReply) -> Result<T, AuthError> {
    serde_json::from_str(&reply.body).map_err(|source| AuthError::Decode { status: reply.status, source })
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser `fetch` transport. No retry and no timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl AuthTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(HttpReply::new(status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(AuthError::Unavailable)
        }
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<HttpReply, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(HttpReply::new(status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token);
            Err(AuthError::Unavailable)
        }
    }
}
