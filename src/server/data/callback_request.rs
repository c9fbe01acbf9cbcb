use entity::sea_orm_active_enums::CallbackStatus;
use migration::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, UpdateResult,
};

/// Repository for customer callback requests
pub struct CallbackRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CallbackRequestRepository<'a, C> {
    /// Creates a new instance of [`CallbackRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a callback request by ID
    pub async fn get(
        &self,
        callback_id: i32,
    ) -> Result<Option<entity::callback_request::Model>, DbErr> {
        entity::prelude::CallbackRequest::find_by_id(callback_id)
            .one(self.db)
            .await
    }

    /// Every callback request newest first
    pub async fn list(&self) -> Result<Vec<entity::callback_request::Model>, DbErr> {
        entity::prelude::CallbackRequest::find()
            .order_by_desc(entity::callback_request::Column::CreatedAt)
            .order_by_desc(entity::callback_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Resolve a callback request that is still pending
    pub async fn resolve(&self, callback_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::CallbackRequest::update_many()
            .col_expr(
                entity::callback_request::Column::Status,
                Expr::value(CallbackStatus::Resolved),
            )
            .filter(entity::callback_request::Column::Id.eq(callback_id))
            .filter(entity::callback_request::Column::Status.eq(CallbackStatus::Pending))
            .exec(self.db)
            .await
    }
}
