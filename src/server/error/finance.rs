use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by order amount checks and seller payouts
#[derive(Error, Debug)]
pub enum FinanceError {
    /// An order amount is below zero
    #[error("Order amounts must not be negative")]
    NegativeAmount,
    /// Commission plus tech fee is more than the subtotal
    #[error("Commission and tech fee exceed the order subtotal")]
    FeesExceedSubtotal,
    /// No payout with the given ID
    #[error("Payout ID {0:?} not found")]
    PayoutNotFound(i32),
    /// Released payouts are final
    #[error("Payout ID {0:?} has already been released")]
    PayoutAlreadyReleased(i32),
    /// The period ends before it starts
    #[error("Payout period starts on {start} which is after {end}")]
    InvalidPayoutWindow {
        /// First day of the period
        start: chrono::NaiveDate,
        /// Last day of the period
        end: chrono::NaiveDate,
    },
    /// Nothing is left to pay out for the seller in the period
    #[error("Seller ID {0:?} has no unsettled delivered orders in the payout period")]
    EmptyPayoutWindow(i32),
    /// A concurrent payout claimed some of the orders first
    #[error("Orders of seller ID {0:?} were settled by another payout in the meantime")]
    OrdersAlreadySettled(i32),
}

impl IntoResponse for FinanceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PayoutNotFound(_) => error_response(StatusCode::NOT_FOUND, "Payout not found"),
            Self::PayoutAlreadyReleased(_) => error_response(
                StatusCode::CONFLICT,
                "This payout has already been released",
            ),
            Self::InvalidPayoutWindow { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Start date must not be after end date",
            ),
            Self::EmptyPayoutWindow(_) => error_response(
                StatusCode::BAD_REQUEST,
                "The seller has no delivered orders awaiting payout in this period",
            ),
            Self::OrdersAlreadySettled(_) => error_response(
                StatusCode::CONFLICT,
                "Some of these orders were paid out by another payout, try again",
            ),
            err @ (Self::NegativeAmount | Self::FeesExceedSubtotal) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
