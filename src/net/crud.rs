//! Generic CRUD client shared by every entity screen.
//!
//! The admin screens all speak the same REST dialect: list at the collection
//! path, create by POST, update by PUT `/{id}`, delete by DELETE `/{id}`.
//! One `serde_json::Value`-row client covers all of them; each screen only
//! supplies its collection path. Every request attaches the bearer token
//! when one is stored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use serde_json::Value;

use super::api::ApiError;

#[must_use]
pub fn item_path(base: &str, id: i64) -> String {
    format!("{base}/{id}")
}

/// Extract the numeric key of a row, when present. Most tables use `id`;
/// the requisitos-per-beca join table names its key `id_detalle`.
#[must_use]
pub fn row_id(row: &Value) -> Option<i64> {
    row.get("id")
        .or_else(|| row.get("id_detalle"))
        .and_then(Value::as_i64)
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::state::session::{BrowserSession, SessionStore as _};

    match BrowserSession.current() {
        Some(session) => builder.header("Authorization", &super::api::bearer(&session.token)),
        None => builder,
    }
}

/// Fetch the full collection at `base`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server responds with
/// a non-OK status, or the body is not a JSON array.
pub async fn fetch_rows(base: &str) -> Result<Vec<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&super::api::endpoint(base)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Value>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Create a row via `POST {base}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server responds
/// with a non-OK status.
pub async fn create_row(base: &str, body: &Value) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&super::api::endpoint(base)))
            .json(body)
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
        let _ = (base, body);
        Err(ApiError::Unavailable)
    }
}

/// Update a row via `PUT {base}/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server responds
/// with a non-OK status.
pub async fn update_row(base: &str, id: i64, body: &Value) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::api::endpoint(&item_path(base, id));
        let resp = with_auth(gloo_net::http::Request::put(&url))
            .json(body)
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
        let _ = (base, id, body);
        Err(ApiError::Unavailable)
    }
}

/// Delete a row via `DELETE {base}/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server responds
/// with a non-OK status.
pub async fn delete_row(base: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::api::endpoint(&item_path(base, id));
        let resp = with_auth(gloo_net::http::Request::delete(&url))
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
        let _ = (base, id);
        Err(ApiError::Unavailable)
    }
}
