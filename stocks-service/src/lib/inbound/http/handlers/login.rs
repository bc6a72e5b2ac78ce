use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::AccessTokenResponse;
use super::ApiError;
use crate::account::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    // The email is deliberately not validated here: a badly formed address
    // follows the same path as any unknown account.
    let token = state
        .account_service
        .login(LoginCommand {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(AccessTokenResponse {
        access_token: token.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
