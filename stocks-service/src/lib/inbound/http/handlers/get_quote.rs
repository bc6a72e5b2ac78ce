use axum::extract::Path;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Returns the upstream quote body byte for byte. Reached only through the
/// authentication middleware.
pub async fn get_quote(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(symbol): Path<String>,
) -> Result<Response, ApiError> {
    tracing::debug!(user_id = %principal.user_id, symbol, "Quote requested");

    let quote = state.quote_gateway.fetch_quote(&symbol).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], quote.body).into_response())
}
