//! REST API helpers for the game server endpoints.
//!
//! In the browser (wasm32): real HTTP calls via `gloo-net`. On other
//! targets the helpers return an error, since the endpoints are only
//! meaningful alongside a page.
//!
//! ERROR HANDLING
//! ==============
//! Exactly two failure kinds are distinguished: the request did not
//! complete (`Network`, which also covers an undecodable body) and the
//! server answered with a non-success status (`Status`). Callers treat
//! them identically — log and leave the displayed state alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::GameSnapshot;

/// Failure of a game server request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
}

/// Start a game round via `POST /start_game`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server answers with a
/// non-success status.
pub async fn start_game() -> Result<GameSnapshot, ApiError> {
    post_for_snapshot("/start_game").await
}

/// Reset the game via `POST /reset`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server answers with a
/// non-success status.
pub async fn reset() -> Result<GameSnapshot, ApiError> {
    post_for_snapshot("/reset").await
}

/// POST to a state-returning endpoint with an empty body and decode the
/// snapshot from the response.
async fn post_for_snapshot(path: &str) -> Result<GameSnapshot, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<GameSnapshot>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
