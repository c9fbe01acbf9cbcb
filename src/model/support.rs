use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{CallbackStatus, TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer support ticket
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportTicketDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub phone: String,
    pub order_id: Option<i32>,
    pub issue_type: String,
    pub description: String,
    #[schema(value_type = String, example = "open")]
    pub status: TicketStatus,
    #[schema(value_type = String, example = "medium")]
    pub priority: TicketPriority,
    pub admin_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::support_ticket::Model> for SupportTicketDto {
    fn from(ticket: entity::support_ticket::Model) -> Self {
        Self {
            id: ticket.id,
            user_id: ticket.user_id,
            name: ticket.name,
            phone: ticket.phone,
            order_id: ticket.order_id,
            issue_type: ticket.issue_type,
            description: ticket.description,
            status: ticket.status,
            priority: ticket.priority,
            admin_notes: ticket.admin_notes,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

/// Move a ticket to a new status
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketStatusDto {
    #[schema(value_type = String, example = "in_progress")]
    pub status: TicketStatus,
}

/// Replace the internal notes of a ticket
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketNotesDto {
    pub admin_notes: Option<String>,
}

/// A customer's request to be called back
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CallbackRequestDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub phone: String,
    pub preferred_time: String,
    #[schema(value_type = String, example = "pending")]
    pub status: CallbackStatus,
    pub admin_notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::callback_request::Model> for CallbackRequestDto {
    fn from(callback: entity::callback_request::Model) -> Self {
        Self {
            id: callback.id,
            user_id: callback.user_id,
            name: callback.name,
            phone: callback.phone,
            preferred_time: callback.preferred_time,
            status: callback.status,
            admin_notes: callback.admin_notes,
            created_at: callback.created_at,
        }
    }
}
