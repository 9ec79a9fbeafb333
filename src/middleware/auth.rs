//! Simple API key authentication middleware
//!
//! This provides basic security through a shared API key carried in the
//! `X-API-Key` header. When no key is configured, requests pass through.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::config::AuthConfig;

/// Middleware function to check the API key
pub async fn api_key_auth(
    State(auth): State<Arc<AuthConfig>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected_key) = auth.api_key.as_deref() else {
        // No key configured: open access
        return Ok(next.run(request).await);
    };

    let provided_key = headers.get("X-API-Key").and_then(|v| v.to_str().ok());

    match provided_key {
        Some(key) if key == expected_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key provided");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::debug!("No API key provided in X-API-Key header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
