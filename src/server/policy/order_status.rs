//! Order status state machine.
//!
//! ```text
//! confirmed -> processing -> shipped -> delivered
//!     \            \            \
//!      +------------+------------+--> cancelled
//! ```
//!
//! Delivered and cancelled are terminal. Orders advance one step at a time and a write to
//! the current status is rejected rather than treated as a no-op.

use entity::sea_orm_active_enums::OrderStatus;

use crate::server::error::order::OrderError;

/// Statuses counted as open work on the dashboards and live order board
pub const OPEN_STATUSES: [OrderStatus; 3] = [
    OrderStatus::Confirmed,
    OrderStatus::Processing,
    OrderStatus::Shipped,
];

/// Delivered and cancelled orders never change again
pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Delivered | OrderStatus::Cancelled)
}

/// The next status on the fulfilment path, if any
pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Confirmed => Some(OrderStatus::Processing),
        OrderStatus::Processing => Some(OrderStatus::Shipped),
        OrderStatus::Shipped => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

/// Whether an order may move from `from` to `to`.
///
/// Any open order may be cancelled, otherwise only the next step on the fulfilment path is
/// allowed.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    if is_terminal(from) {
        return false;
    }

    to == OrderStatus::Cancelled || next_status(from) == Some(to)
}

/// Validates a requested transition before it is written
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition { from, to })
    }
}
