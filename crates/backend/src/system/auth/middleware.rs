use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Middleware that requires the configured admin token.
///
/// An empty `admin.token` turns the admin API off.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = state.config.admin.token.trim();
    if expected.is_empty() {
        return Err(ApiError::Forbidden);
    }

    match bearer_token(&req) {
        Some(token) if token == expected => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Rejected admin request to {}", req.uri().path());
            Err(ApiError::Unauthorized)
        }
    }
}
