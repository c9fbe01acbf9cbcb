use chrono::Utc;
use entity::sea_orm_active_enums::{CallbackStatus, TicketPriority, TicketStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn support<'a>(&'a self) -> SupportFixtures<'a> {
        SupportFixtures { setup: self }
    }
}

pub struct SupportFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SupportFixtures<'a> {
    pub async fn insert_ticket(
        &self,
        status: TicketStatus,
    ) -> Result<entity::support_ticket::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::SupportTicket::insert(entity::support_ticket::ActiveModel {
                user_id: ActiveValue::Set(None),
                name: ActiveValue::Set("Meera".to_string()),
                phone: ActiveValue::Set("+919900112233".to_string()),
                order_id: ActiveValue::Set(None),
                issue_type: ActiveValue::Set("missing_item".to_string()),
                description: ActiveValue::Set("Milk packet was missing".to_string()),
                status: ActiveValue::Set(status),
                priority: ActiveValue::Set(TicketPriority::Medium),
                admin_notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_callback(
        &self,
        status: CallbackStatus,
    ) -> Result<entity::callback_request::Model, TestError> {
        Ok(
            entity::prelude::CallbackRequest::insert(entity::callback_request::ActiveModel {
                user_id: ActiveValue::Set(None),
                name: ActiveValue::Set("Ravi".to_string()),
                phone: ActiveValue::Set("+919900445566".to_string()),
                preferred_time: ActiveValue::Set("evening".to_string()),
                status: ActiveValue::Set(status),
                admin_notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
