use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use validator::Validate;

use super::field_error;
use super::EMAIL_FORMAT;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<US: UserServicePort>(
    State(state): State<AppState<US>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;
    body.validate()?;

    let email = EmailAddress::new(body.email).map_err(|e| {
        ApiError::BadRequest(
            "Validation error: invalid data".to_string(),
            field_error("email", &e.to_string()),
        )
    })?;

    let outcome = state
        .user_service
        .login(LoginCommand::new(email, body.password))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "User logged in successfully".to_string(),
            token: outcome.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Field is required"),
        email(message = "Invalid email format"),
        regex(path = *EMAIL_FORMAT, message = "Invalid email format")
    )]
    email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Field is required"))]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
