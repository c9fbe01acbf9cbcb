use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while delivering SMS messages
#[derive(Error, Debug)]
pub enum SmsError {
    /// The gateway answered with a non-success HTTP status
    #[error("SMS gateway rejected message with status {0}")]
    Rejected(u16),
}

impl IntoResponse for SmsError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::BAD_GATEWAY,
            "Failed to send the verification code, please try again",
        )
    }
}
