use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{order::RecentOrderDto, seller::AreaDto};

/// Marketplace totals for the admin home
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub orders_today: u64,
    /// Orders not yet delivered or cancelled
    pub open_orders: u64,
    /// Sum of order totals placed today, excluding cancelled orders
    pub revenue_today: Decimal,
    pub delivery_partners: u64,
    /// The latest orders, newest first
    pub recent_orders: Vec<RecentOrderDto>,
}

/// Totals for the seller home
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SellerDashboardDto {
    pub seller_name: String,
    pub area: Option<AreaDto>,
    /// `false` until an admin has verified the seller
    pub is_active: bool,
    pub listed_products: u64,
    pub total_orders: u64,
    /// Sum of subtotals of delivered orders
    pub delivered_revenue: Decimal,
}
