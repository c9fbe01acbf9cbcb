//! Support tickets and callback requests raised by customers.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::support::{CallbackRequestDto, SupportTicketDto},
    server::{
        data::{callback_request::CallbackRequestRepository, support_ticket::SupportTicketRepository},
        error::{support::SupportError, Error},
        policy::support::check_ticket_transition,
    },
};

pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportService<'a> {
    /// Creates a new instance of [`SupportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_tickets(&self) -> Result<Vec<SupportTicketDto>, Error> {
        let ticket_repo = SupportTicketRepository::new(self.db);

        let tickets = ticket_repo.list().await?;

        Ok(tickets.into_iter().map(SupportTicketDto::from).collect())
    }

    /// Moves a ticket along open, in progress and closed.
    ///
    /// # Returns
    /// - `Ok(SupportTicketDto)` - Ticket after the change
    /// - `Err(Error::SupportError(SupportError::TicketNotFound))` - Unknown ticket
    /// - `Err(Error::SupportError(SupportError::InvalidTicketTransition))` - Not allowed
    /// - `Err(Error::SupportError(SupportError::TicketStatusChanged))` - Changed concurrently
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn update_ticket_status(
        &self,
        ticket_id: i32,
        to: TicketStatus,
    ) -> Result<SupportTicketDto, Error> {
        let ticket_repo = SupportTicketRepository::new(self.db);

        let Some(ticket) = ticket_repo.get(ticket_id).await? else {
            return Err(SupportError::TicketNotFound(ticket_id).into());
        };

        check_ticket_transition(ticket.status, to)?;

        let result = ticket_repo.update_status(ticket.id, ticket.status, to).await?;
        if result.rows_affected == 0 {
            return Err(SupportError::TicketStatusChanged(ticket_id).into());
        }

        let Some(ticket) = ticket_repo.get(ticket_id).await? else {
            return Err(SupportError::TicketNotFound(ticket_id).into());
        };

        tracing::info!("Support ticket ID {} is now {:?}", ticket.id, ticket.status);

        Ok(SupportTicketDto::from(ticket))
    }

    /// Replaces the admin notes of a ticket, blank notes clear them
    pub async fn update_ticket_notes(
        &self,
        ticket_id: i32,
        admin_notes: Option<String>,
    ) -> Result<SupportTicketDto, Error> {
        let ticket_repo = SupportTicketRepository::new(self.db);

        let admin_notes = admin_notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let Some(ticket) = ticket_repo.update_notes(ticket_id, admin_notes).await? else {
            return Err(SupportError::TicketNotFound(ticket_id).into());
        };

        Ok(SupportTicketDto::from(ticket))
    }

    pub async fn list_callbacks(&self) -> Result<Vec<CallbackRequestDto>, Error> {
        let callback_repo = CallbackRequestRepository::new(self.db);

        let callbacks = callback_repo.list().await?;

        Ok(callbacks.into_iter().map(CallbackRequestDto::from).collect())
    }

    /// Resolves a pending callback request.
    ///
    /// # Returns
    /// - `Ok(CallbackRequestDto)` - Callback resolved
    /// - `Err(Error::SupportError(SupportError::CallbackNotFound))` - Unknown callback
    /// - `Err(Error::SupportError(SupportError::CallbackAlreadyResolved))` - Not pending
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn resolve_callback(&self, callback_id: i32) -> Result<CallbackRequestDto, Error> {
        let callback_repo = CallbackRequestRepository::new(self.db);

        let result = callback_repo.resolve(callback_id).await?;

        let Some(callback) = callback_repo.get(callback_id).await? else {
            return Err(SupportError::CallbackNotFound(callback_id).into());
        };

        if result.rows_affected == 0 {
            return Err(SupportError::CallbackAlreadyResolved(callback_id).into());
        }

        tracing::info!("Resolved callback request ID {}", callback.id);

        Ok(CallbackRequestDto::from(callback))
    }
}
