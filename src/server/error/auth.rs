use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while authenticating callers and checking their role
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is logged in
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// The session points at a user that no longer exists
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// The user's role does not grant access to the route
    #[error("User ID {0:?} attempted to access a route outside of their role")]
    AccessDenied(i32),
    /// The phone number could not be normalized to `+` and 10 to 15 digits
    #[error("Phone number {0:?} is not a valid mobile number")]
    InvalidPhone(String),
    /// No login code was issued for the phone number
    #[error("No pending verification code for phone {0:?}")]
    OtpNotFound(String),
    /// The login code outlived its TTL
    #[error("Verification code for phone {0:?} has expired")]
    OtpExpired(String),
    /// The login code was guessed wrong too many times
    #[error("Too many incorrect verification attempts for phone {0:?}")]
    OtpAttemptsExceeded(String),
    /// The submitted login code does not match
    #[error("Incorrect verification code submitted for phone {0:?}")]
    OtpInvalid(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => error_response(StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_) => error_response(StatusCode::FORBIDDEN, "Access denied"),
            Self::InvalidPhone(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Please enter a valid mobile number",
            ),
            Self::OtpNotFound(_) => error_response(
                StatusCode::BAD_REQUEST,
                "No verification code was requested for this number, please request a new one",
            ),
            Self::OtpExpired(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Verification code has expired, please request a new one",
            ),
            Self::OtpAttemptsExceeded(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Too many incorrect attempts, please request a new code",
            ),
            Self::OtpInvalid(_) => {
                error_response(StatusCode::BAD_REQUEST, "Incorrect verification code")
            }
        }
    }
}
