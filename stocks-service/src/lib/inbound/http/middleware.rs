use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::models::UserId;
use crate::inbound::http::router::AppState;

/// Authenticated principal for one request, derived from verified claims
/// and discarded when the request completes.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware gating protected routes behind bearer-token verification.
///
/// Runs before any other state is touched. Malformed, badly signed, and
/// expired tokens are logged distinctly but all produce the same 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.token_authority.verify(token).map_err(|e| {
        match &e {
            TokenError::Expired => tracing::warn!("Token rejected: expired"),
            TokenError::BadSignature => tracing::warn!("Token rejected: bad signature"),
            other => tracing::warn!(error = %other, "Token rejected: malformed"),
        }
        unauthorized("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedPrincipal {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": message })),
    )
        .into_response()
}
