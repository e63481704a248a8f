//! API Key Middleware
//!
//! Guards every `/api/` path with the `X-ERU-ApiKey` shared secret. Other
//! paths (e.g. `/health`) pass through untouched.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::warn;

use super::handlers::AppState;
use crate::error::{ApiError, Result};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-ERU-ApiKey";

/// Path prefix protected by the API key.
pub const PROTECTED_PREFIX: &str = "/api/";

/// Axum middleware enforcing the API key on protected paths.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if !request.uri().path().starts_with(PROTECTED_PREFIX) {
        return Ok(next.run(request).await);
    }

    if let Err(err) = check_api_key(
        state.api_key.as_deref(),
        request.headers().get(API_KEY_HEADER),
    ) {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = err.message(),
            "Rejected unauthenticated API request"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}

/// Checks a provided header against the configured secret.
///
/// An unconfigured secret rejects everything. The comparison is constant-time.
pub fn check_api_key(expected: Option<&str>, provided: Option<&HeaderValue>) -> Result<()> {
    let Some(expected) = expected.filter(|key| !key.trim().is_empty()) else {
        return Err(ApiError::Unauthorized("API key not configured".to_string()));
    };

    let provided = provided
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty());

    match provided {
        Some(provided) if bool::from(expected.as_bytes().ct_eq(provided.as_bytes())) => Ok(()),
        _ => Err(ApiError::Unauthorized("Invalid API key".to_string())),
    }
}
