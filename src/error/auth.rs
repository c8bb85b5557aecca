use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{MessageDto, TokenDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was sent on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing Authorization header on protected route")]
    MissingCredentials,

    /// The bearer token failed signature verification or has expired.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Bearer token failed verification")]
    InvalidToken,

    /// The authenticated identity lacks the permission the route requires,
    /// or acted on a resource it does not own.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Identity '{0}' lacks the required permission")]
    AccessDenied(String),

    /// Token issuance was requested for an email with no user record.
    ///
    /// Results in a 403 Forbidden response carrying an empty token, which is
    /// what the companion front-end expects on a failed login.
    #[error("No user registered for email '{0}'")]
    UnknownUser(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Missing credentials map to 401, everything else to 403. Client-facing
/// bodies stay generic; the precise reason is only visible server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(MessageDto {
                    message: "unauthorized access".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken | Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(MessageDto {
                    message: "forbidden access".to_string(),
                }),
            )
                .into_response(),
            Self::UnknownUser(_) => (
                StatusCode::FORBIDDEN,
                Json(TokenDto {
                    access_token: String::new(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_is_unauthorized() {
        let response = AuthError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_token_is_forbidden() {
        let response = AuthError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn access_denied_is_forbidden() {
        let response = AuthError::AccessDenied("user@example.com".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn unknown_user_is_forbidden() {
        let response = AuthError::UnknownUser("ghost@example.com".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
