use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AccessTokenResponse;
use super::ApiError;
use crate::account::errors::EmailError;
use crate::account::models::EmailAddress;
use crate::account::models::RegisterCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, Json<AccessTokenResponse>), ApiError> {
    let token = state
        .account_service
        .register(body.try_into_command()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccessTokenResponse {
            access_token: token.access_token,
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterCommand, EmailError> {
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(email, self.password))
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
