use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::OrderStatus;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while reading and updating orders
#[derive(Error, Debug)]
pub enum OrderError {
    /// No order with the given ID
    #[error("Order ID {0:?} not found")]
    NotFound(i32),
    /// The requested status change is not allowed
    #[error("Order status cannot change from {from:?} to {to:?}")]
    InvalidTransition {
        /// Current status
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },
    /// Another update changed the order's status first
    #[error("Order ID {0:?} changed status while it was being updated")]
    StatusChanged(i32),
    /// The seller tried to act on another seller's order
    #[error("Order ID {order_id:?} does not belong to seller ID {seller_id:?}")]
    NotOwned {
        /// Order the seller tried to act on
        order_id: i32,
        /// Seller making the request
        seller_id: i32,
    },
    /// The date filter ends before it starts
    #[error("Order date range starts on {start} which is after {end}")]
    InvalidDateRange {
        /// First day of the range
        start: chrono::NaiveDate,
        /// Last day of the range
        end: chrono::NaiveDate,
    },
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Order not found"),
            Self::InvalidTransition { from, to } => error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "Order status cannot change from {} to {}",
                    status_label(from),
                    status_label(to)
                ),
            ),
            Self::StatusChanged(_) => error_response(
                StatusCode::CONFLICT,
                "Order status was changed by someone else, please refresh and try again",
            ),
            Self::NotOwned { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You can only update your own orders",
            ),
            Self::InvalidDateRange { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Start date must not be after end date",
            ),
        }
    }
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Confirmed => "confirmed",
        OrderStatus::Processing => "processing",
        OrderStatus::Shipped => "shipped",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Cancelled => "cancelled",
    }
}
