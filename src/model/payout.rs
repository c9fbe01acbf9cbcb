use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::PayoutStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A payout owed or released to a seller
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutDto {
    pub id: i32,
    pub seller_id: i32,
    pub seller_name: Option<String>,
    pub total_order_amount: Decimal,
    pub total_commission_amount: Decimal,
    pub total_tech_fee_amount: Decimal,
    pub final_payout_amount: Decimal,
    #[schema(value_type = String, example = "pending")]
    pub payout_status: PayoutStatus,
    pub released_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl PayoutDto {
    /// Builds the payout view with the seller name resolved by the caller
    pub fn new(payout: entity::seller_payout::Model, seller_name: Option<String>) -> Self {
        Self {
            id: payout.id,
            seller_id: payout.seller_id,
            seller_name,
            total_order_amount: payout.total_order_amount,
            total_commission_amount: payout.total_commission_amount,
            total_tech_fee_amount: payout.total_tech_fee_amount,
            final_payout_amount: payout.final_payout_amount,
            payout_status: payout.payout_status,
            released_at: payout.released_at,
            created_at: payout.created_at,
        }
    }
}

/// Compute and record a payout for a seller's delivered orders
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePayoutDto {
    pub seller_id: i32,
    /// First day (inclusive) of the settlement period
    pub start_date: NaiveDate,
    /// Last day (inclusive) of the settlement period
    pub end_date: NaiveDate,
}
