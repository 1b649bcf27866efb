use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::field_error;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Return the caller's decoded token claims.
///
/// The identity must still exist in the store; a token outliving its
/// identity yields 404.
pub async fn get_profile<US: UserServicePort>(
    State(state): State<AppState<US>>,
    authenticated: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<auth::Claims>, ApiError> {
    let Some(Extension(authenticated)) = authenticated else {
        return Err(ApiError::NotFound(
            "User not found".to_string(),
            field_error("user", "User not found"),
        ));
    };

    state.user_service.get_user(&authenticated.user_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, authenticated.claims))
}
