use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was present, or the header
    /// was malformed. Results in a 401 Unauthorized response.
    #[error("Authentication token not found")]
    MissingToken,

    /// The bearer token failed signature verification or decoding.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token")]
    InvalidToken,

    /// The bearer token's expiry window has passed.
    /// Results in a 401 Unauthorized response.
    #[error("Token has expired")]
    TokenExpired,

    /// The token's subject no longer exists or has been deactivated.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} does not exist or has been deactivated")]
    UserInactive(i32),

    /// The login credentials did not match an active account. Deliberately
    /// indistinguishable between unknown user and wrong password.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The authenticated user's aggregated group permissions do not grant the
    /// required (resource, action) capability.
    /// Results in a 403 Forbidden response.
    #[error("Missing permission {action} on {resource}")]
    AccessDenied {
        resource: &'static str,
        action: &'static str,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Failed permission checks map to 403 Forbidden; every other failure mode is
/// 401 Unauthorized. Denied access is logged at debug level for diagnostics
/// while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AccessDenied { resource, action } => {
                tracing::debug!(resource, action, "Permission denied");
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action",
                    )),
                )
                    .into_response()
            }
            Self::UserInactive(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("User does not exist or has been deactivated")),
            )
                .into_response(),
            err => (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(err.to_string()))).into_response(),
        }
    }
}
