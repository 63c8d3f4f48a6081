//! REST API helpers for the scholarship backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth failures degrade
//! to screen-local messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend mount point; every endpoint hangs off this prefix.
pub const API_BASE: &str = "/api-beca";

#[must_use]
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// `Authorization` header value for an issued token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Authenticate via `POST /api-beca/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server rejects the
/// credentials, or the response body cannot be decoded.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api-beca/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server responds
/// with a non-OK status.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/register"))
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

