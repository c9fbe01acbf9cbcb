use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::PayoutStatus;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, UpdateResult,
};

use crate::server::policy::finance::PayoutTotals;

/// Repository for seller payouts
pub struct PayoutRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PayoutRepository<'a, C> {
    /// Creates a new instance of [`PayoutRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending payout for a seller
    pub async fn create(
        &self,
        seller_id: i32,
        totals: &PayoutTotals,
    ) -> Result<entity::seller_payout::Model, DbErr> {
        let payout = entity::seller_payout::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            total_order_amount: ActiveValue::Set(totals.total_order_amount),
            total_commission_amount: ActiveValue::Set(totals.total_commission_amount),
            total_tech_fee_amount: ActiveValue::Set(totals.total_tech_fee_amount),
            final_payout_amount: ActiveValue::Set(totals.final_payout_amount),
            payout_status: ActiveValue::Set(PayoutStatus::Pending),
            released_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        payout.insert(self.db).await
    }

    /// Get a payout by ID
    pub async fn get(&self, payout_id: i32) -> Result<Option<entity::seller_payout::Model>, DbErr> {
        entity::prelude::SellerPayout::find_by_id(payout_id)
            .one(self.db)
            .await
    }

    /// Every payout newest first, each with the seller it is owed to
    pub async fn list_with_seller(
        &self,
    ) -> Result<Vec<(entity::seller_payout::Model, Option<entity::seller::Model>)>, DbErr> {
        entity::prelude::SellerPayout::find()
            .order_by_desc(entity::seller_payout::Column::CreatedAt)
            .order_by_desc(entity::seller_payout::Column::Id)
            .find_also_related(entity::seller::Entity)
            .all(self.db)
            .await
    }

    /// Mark a pending payout as released at `released_at`
    ///
    /// Only rows still pending are touched; check [`UpdateResult::rows_affected`] to learn
    /// whether the payout was released by this call.
    pub async fn release(
        &self,
        payout_id: i32,
        released_at: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::SellerPayout::update_many()
            .col_expr(
                entity::seller_payout::Column::PayoutStatus,
                Expr::value(PayoutStatus::Released),
            )
            .col_expr(
                entity::seller_payout::Column::ReleasedAt,
                Expr::value(Some(released_at)),
            )
            .filter(entity::seller_payout::Column::Id.eq(payout_id))
            .filter(entity::seller_payout::Column::PayoutStatus.eq(PayoutStatus::Pending))
            .exec(self.db)
            .await
    }
}
