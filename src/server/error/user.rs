use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by user and profile management
#[derive(Error, Debug)]
pub enum UserError {
    /// No user with the given ID
    #[error("User ID {0:?} not found")]
    NotFound(i32),
    /// A profile name was blank
    #[error("Profile name must not be empty")]
    InvalidName,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::InvalidName => error_response(StatusCode::BAD_REQUEST, "Name is required"),
        }
    }
}
