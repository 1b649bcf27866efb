use std::collections::BTreeMap;
use std::sync::LazyLock;

use axum::extract::rejection::JsonRejection;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use regex::Regex;
use serde::Serialize;
use validator::ValidationErrors;

use crate::user::errors::UserError;

pub mod login;
pub mod profile;
pub mod register;

/// Field name to first violation message.
pub type FieldErrors = BTreeMap<String, String>;

const VALIDATION_FAILED: &str = "Validation error: invalid data";
const INTERNAL_ERROR: &str = "Internal server error";

/// Accepted email shape: the domain must end in an alphabetic TLD of two or
/// more letters.
pub(crate) static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure a handler or the authorization gate can produce.
///
/// Rendered by a single `IntoResponse` impl as `{status, message, errors}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String, Option<FieldErrors>),
    Unauthorized(String, Option<FieldErrors>),
    NotFound(String, Option<FieldErrors>),
    Conflict(String, Option<FieldErrors>),
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::Conflict(..) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Single-entry field error map.
pub fn field_error(field: &str, message: &str) -> Option<FieldErrors> {
    Some(FieldErrors::from([(field.to_string(), message.to_string())]))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, errors) = match self {
            ApiError::BadRequest(msg, errors)
            | ApiError::Unauthorized(msg, errors)
            | ApiError::NotFound(msg, errors)
            | ApiError::Conflict(msg, errors) => (msg, errors),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (INTERNAL_ERROR.to_string(), None)
            }
        };

        (
            status,
            Json(ApiErrorBody {
                status: status.as_u16(),
                message,
                errors,
            }),
        )
            .into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(
                "User not found".to_string(),
                field_error("user", "User not found"),
            ),
            UserError::NotFoundByEmail(_) => ApiError::NotFound(
                "User not found".to_string(),
                field_error("email", "User not found"),
            ),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(
                "User already exists".to_string(),
                field_error("email", "User already exists"),
            ),
            UserError::InvalidCredentials => ApiError::Unauthorized(
                "Invalid password".to_string(),
                field_error("password", "Invalid password"),
            ),
            UserError::InvalidDisplayName(e) => {
                ApiError::BadRequest(VALIDATION_FAILED.to_string(), field_error("name", &e.to_string()))
            }
            UserError::InvalidEmail(e) => ApiError::BadRequest(
                VALIDATION_FAILED.to_string(),
                field_error("email", &e.to_string()),
            ),
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(VALIDATION_FAILED.to_string(), Some(first_violations(&errors)))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(
            format!("Validation error: {}", rejection.body_text()),
            None,
        )
    }
}

/// Reduce validator output to one message per field.
///
/// A missing value (`length` rule) is reported ahead of format rules so an
/// empty field reads "Field is required" rather than a format complaint.
fn first_violations(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations
                .iter()
                .min_by_key(|violation| violation.code != "length")
                .map(|violation| {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    (field.to_string(), message)
                })
        })
        .collect()
}

/// Catch-all for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(method = %method, uri = %uri, "No route matched");
    ApiError::NotFound("Page not found!".to_string(), None)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
    pub errors: Option<FieldErrors>,
}
