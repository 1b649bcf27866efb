use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::field_error;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub claims: auth::Claims,
}

/// Middleware that validates bearer tokens and adds the decoded claims to
/// request extensions.
///
/// Any failure short-circuits with 401 before the protected handler runs.
pub async fn authenticate<US: UserServicePort>(
    State(state): State<AppState<US>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(req.headers())?;

    // The failure category stays in the logs only
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string(), None)
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.id),
        claims,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers.get(header::AUTHORIZATION).ok_or_else(|| {
        tracing::debug!("Missing Authorization header");
        ApiError::Unauthorized(
            "Token not found".to_string(),
            field_error("token", "Token not found"),
        )
    })?;

    let invalid_header = || {
        tracing::debug!("Malformed Authorization header");
        ApiError::Unauthorized("Invalid Authorization header".to_string(), None)
    };

    let auth_str = auth_header.to_str().map_err(|_| invalid_header())?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                Err(invalid_header())
            } else {
                Ok(token)
            }
        }
        _ => Err(invalid_header()),
    }
}
