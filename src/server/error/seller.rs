use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by seller and area management
#[derive(Error, Debug)]
pub enum SellerError {
    /// The user has no seller row
    #[error("No seller account is linked to user ID {0:?}")]
    AccountNotFound(i32),
    /// No seller with the given ID
    #[error("Seller ID {0:?} not found")]
    NotFound(i32),
    /// No area with the given ID
    #[error("Area ID {0:?} not found")]
    AreaNotFound(i32),
    /// An area name was blank
    #[error("Area name must not be empty")]
    InvalidAreaName,
    /// Commission percentage is outside 0 to 100
    #[error("Commission percentage must be between 0 and 100")]
    InvalidCommission,
    /// Tech fee amount is negative
    #[error("Tech fee amount must not be negative")]
    InvalidTechFee,
}

impl IntoResponse for SellerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccountNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Seller account not found")
            }
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Seller not found"),
            Self::AreaNotFound(_) => error_response(StatusCode::NOT_FOUND, "Area not found"),
            err @ (Self::InvalidAreaName | Self::InvalidCommission | Self::InvalidTechFee) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
