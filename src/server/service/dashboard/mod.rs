//! Headline figures for the admin and seller dashboards.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, Role};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        dashboard::{AdminDashboardDto, SellerDashboardDto},
        order::{OrderDto, RecentOrderDto},
        seller::AreaDto,
    },
    server::{
        data::{
            area::AreaRepository, order::OrderRepository, profile::ProfileRepository,
            seller_price::SellerPriceRepository, user_role::UserRoleRepository,
        },
        error::Error,
        util::time::today_window,
    },
};

/// Number of orders listed on the admin dashboard
pub const RECENT_ORDER_LIMIT: u64 = 10;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Today's order count and revenue, open orders, delivery partner count and the
    /// latest orders with their customers
    pub async fn admin(&self) -> Result<AdminDashboardDto, Error> {
        let order_repo = OrderRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);
        let user_role_repo = UserRoleRepository::new(self.db);

        let (from, until) = today_window(Utc::now().naive_utc())?;
        let orders_today = order_repo.created_between(from, until).await?;

        let revenue_today: Decimal = orders_today
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum();

        let recent = order_repo.recent(RECENT_ORDER_LIMIT).await?;
        let customer_ids: Vec<i32> = recent.iter().map(|order| order.user_id).collect();
        let customers: HashMap<i32, entity::profile::Model> = profile_repo
            .find_by_user_ids(&customer_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        let recent_orders = recent
            .into_iter()
            .map(|order| {
                let customer = customers.get(&order.user_id);

                RecentOrderDto {
                    customer_name: customer.map(|c| c.name.clone()),
                    customer_phone: customer.and_then(|c| c.phone.clone()),
                    order: OrderDto::from(order),
                }
            })
            .collect();

        Ok(AdminDashboardDto {
            orders_today: orders_today.len() as u64,
            open_orders: order_repo.count_open().await?,
            revenue_today,
            delivery_partners: user_role_repo.count_by_role(Role::Delivery).await?,
            recent_orders,
        })
    }

    /// Identity, verification state, listing count, order count and delivered revenue of
    /// one seller
    pub async fn seller(&self, seller: entity::seller::Model) -> Result<SellerDashboardDto, Error> {
        let area_repo = AreaRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);
        let seller_price_repo = SellerPriceRepository::new(self.db);

        let area = match seller.area_id {
            Some(area_id) => area_repo.get(area_id).await?,
            None => None,
        };

        let delivered = order_repo
            .list_by_seller_and_status(seller.id, OrderStatus::Delivered, None)
            .await?;

        Ok(SellerDashboardDto {
            seller_name: seller.seller_name,
            area: area.map(AreaDto::from),
            is_active: seller.is_active,
            listed_products: seller_price_repo.count_by_seller(seller.id).await?,
            total_orders: order_repo.count_by_seller(seller.id).await?,
            delivered_revenue: delivered.iter().map(|order| order.subtotal).sum(),
        })
    }
}
