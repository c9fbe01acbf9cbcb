//! Support ticket workflow.
//!
//! Tickets move open -> in_progress -> closed, or straight from open to closed.

use entity::sea_orm_active_enums::TicketStatus;

use crate::server::error::support::SupportError;

/// Whether a ticket may move from `from` to `to`
pub fn can_transition_ticket(from: TicketStatus, to: TicketStatus) -> bool {
    matches!(
        (from, to),
        (TicketStatus::Open, TicketStatus::InProgress)
            | (TicketStatus::Open, TicketStatus::Closed)
            | (TicketStatus::InProgress, TicketStatus::Closed)
    )
}

/// Validates a requested ticket transition before it is written
pub fn check_ticket_transition(from: TicketStatus, to: TicketStatus) -> Result<(), SupportError> {
    if can_transition_ticket(from, to) {
        Ok(())
    } else {
        Err(SupportError::InvalidTicketTransition { from, to })
    }
}
