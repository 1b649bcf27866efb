use std::borrow::Cow;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;
use validator::ValidationError;

use super::field_error;
use super::EMAIL_FORMAT;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;

pub async fn register<US: UserServicePort>(
    State(state): State<AppState<US>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;
    body.validate()?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    message: "User created successfully".to_string(),
                    user: user.into(),
                },
            )
        })
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field is required"))]
    name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Field is required"),
        email(message = "Invalid email format"),
        regex(path = *EMAIL_FORMAT, message = "Invalid email format")
    )]
    email: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Field is required"),
        custom(function = "validate_password_strength")
    )]
    password: String,
}

/// At least six characters with a digit, a lower-case and an upper-case letter.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let strong = password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase());

    if strong {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_strength");
        error.message = Some(Cow::Borrowed("Invalid password format"));
        Err(error)
    }
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("{0}")]
    Name(#[from] DisplayNameError),

    #[error("{0}")]
    Email(#[from] EmailError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let name = DisplayName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(name, email, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        let field = match err {
            ParseRegisterRequestError::Name(_) => "name",
            ParseRegisterRequestError::Email(_) => "email",
        };
        ApiError::BadRequest(
            "Validation error: invalid data".to_string(),
            field_error(field, &err.to_string()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub user: UserData,
}

/// Public view of an identity; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("Abc123").is_ok());
        assert!(validate_password_strength("Ab12").is_err());
        assert!(validate_password_strength("abc123").is_err());
        assert!(validate_password_strength("ABC123").is_err());
        assert!(validate_password_strength("Abcdef").is_err());
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Alice", "alice@x.com", "Abc123").validate().is_ok());
    }

    #[test]
    fn test_invalid_request_tags_fields() {
        let errors = request("", "not-an-email", "weak").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_email_without_tld_rejected() {
        for email in ["alice@localhost", "a@b", "alice@x.c", "alice@x.123"] {
            let errors = request("Alice", email, "Abc123").validate().unwrap_err();
            let fields = errors.field_errors();

            assert!(fields.contains_key("email"), "email {:?} should be rejected", email);
            assert_eq!(fields.len(), 1);
        }
    }

    #[test]
    fn test_command_normalizes_email() {
        let command = request(" Alice ", "Alice@X.com", "Abc123")
            .try_into_command()
            .unwrap();

        assert_eq!(command.name.as_str(), "Alice");
        assert_eq!(command.email.as_str(), "alice@x.com");
    }

    #[test]
    fn test_blank_name_rejected_after_trim() {
        let error = request("   ", "alice@x.com", "Abc123")
            .try_into_command()
            .unwrap_err();

        assert!(matches!(error, ParseRegisterRequestError::Name(_)));
    }
}
