use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::TicketStatus;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by the support ticket and callback workflows
#[derive(Error, Debug)]
pub enum SupportError {
    /// No support ticket with the given ID
    #[error("Support ticket ID {0:?} not found")]
    TicketNotFound(i32),
    /// The requested status change is not allowed
    #[error("Support ticket status cannot change from {from:?} to {to:?}")]
    InvalidTicketTransition {
        /// Current status
        from: TicketStatus,
        /// Requested status
        to: TicketStatus,
    },
    /// Another update changed the ticket's status first
    #[error("Support ticket ID {0:?} changed status while it was being updated")]
    TicketStatusChanged(i32),
    /// No callback request with the given ID
    #[error("Callback request ID {0:?} not found")]
    CallbackNotFound(i32),
    /// The callback request was already marked resolved
    #[error("Callback request ID {0:?} is already resolved")]
    CallbackAlreadyResolved(i32),
}

impl IntoResponse for SupportError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::TicketNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Support ticket not found")
            }
            Self::InvalidTicketTransition { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Support ticket cannot move to the requested status",
            ),
            Self::TicketStatusChanged(_) => error_response(
                StatusCode::CONFLICT,
                "Support ticket was updated by someone else, please refresh and try again",
            ),
            Self::CallbackNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Callback request not found")
            }
            Self::CallbackAlreadyResolved(_) => error_response(
                StatusCode::CONFLICT,
                "Callback request has already been resolved",
            ),
        }
    }
}
