use chrono::Utc;
use entity::sea_orm_active_enums::TicketStatus;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};

/// Repository for customer support tickets
pub struct SupportTicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupportTicketRepository<'a, C> {
    /// Creates a new instance of [`SupportTicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a support ticket by ID
    pub async fn get(
        &self,
        ticket_id: i32,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find_by_id(ticket_id)
            .one(self.db)
            .await
    }

    /// Every ticket newest first
    pub async fn list(&self) -> Result<Vec<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find()
            .order_by_desc(entity::support_ticket::Column::CreatedAt)
            .order_by_desc(entity::support_ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Move a ticket from `from` to `to` only if it is still in `from`
    pub async fn update_status(
        &self,
        ticket_id: i32,
        from: TicketStatus,
        to: TicketStatus,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::SupportTicket::update_many()
            .col_expr(entity::support_ticket::Column::Status, Expr::value(to))
            .col_expr(
                entity::support_ticket::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::support_ticket::Column::Id.eq(ticket_id))
            .filter(entity::support_ticket::Column::Status.eq(from))
            .exec(self.db)
            .await
    }

    /// Returns `None` if the ticket does not exist.
    pub async fn update_notes(
        &self,
        ticket_id: i32,
        admin_notes: Option<String>,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        let Some(ticket) = self.get(ticket_id).await? else {
            return Ok(None);
        };

        let mut ticket_am = ticket.into_active_model();
        ticket_am.admin_notes = ActiveValue::Set(admin_notes);
        ticket_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let ticket = ticket_am.update(self.db).await?;

        Ok(Some(ticket))
    }
}
