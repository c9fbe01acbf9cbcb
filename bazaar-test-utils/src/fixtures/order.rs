use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, PayoutStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

/// Delivery fee charged on every fixture order
pub const FIXTURE_DELIVERY_FEE: i64 = 20;

impl TestContext {
    pub fn order<'a>(&'a self) -> OrderFixtures<'a> {
        OrderFixtures { setup: self }
    }
}

pub struct OrderFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OrderFixtures<'a> {
    /// Insert an order created now.
    ///
    /// The frozen split uses 10% commission and a per-order tech fee of 5, matching the
    /// terms of [`SellerFixtures::insert_seller`](crate::fixtures::seller::SellerFixtures::insert_seller).
    /// Use subtotals that are multiples of 10 to keep every amount whole.
    pub async fn insert_order(
        &self,
        user_id: i32,
        seller_id: Option<i32>,
        subtotal: i64,
        status: OrderStatus,
    ) -> Result<entity::orders::Model, TestError> {
        self.insert_order_at(user_id, seller_id, subtotal, status, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_order_at(
        &self,
        user_id: i32,
        seller_id: Option<i32>,
        subtotal: i64,
        status: OrderStatus,
        created_at: NaiveDateTime,
    ) -> Result<entity::orders::Model, TestError> {
        let sequence = entity::prelude::Orders::find().count(&self.setup.db).await? + 1;

        let subtotal = Decimal::from(subtotal);
        let delivery_fee = Decimal::from(FIXTURE_DELIVERY_FEE);
        let commission = subtotal / Decimal::from(10);
        let tech_fee = Decimal::from(5);

        Ok(
            entity::prelude::Orders::insert(entity::orders::ActiveModel {
                order_number: ActiveValue::Set(format!("ORD-{:06}", sequence)),
                user_id: ActiveValue::Set(user_id),
                address_id: ActiveValue::Set(None),
                seller_id: ActiveValue::Set(seller_id),
                area_id: ActiveValue::Set(None),
                delivery_slot: ActiveValue::Set("morning".to_string()),
                payment_mode: ActiveValue::Set("cod".to_string()),
                subtotal: ActiveValue::Set(subtotal),
                delivery_fee: ActiveValue::Set(delivery_fee),
                total: ActiveValue::Set(subtotal + delivery_fee),
                status: ActiveValue::Set(status),
                seller_price_amount: ActiveValue::Set(subtotal - commission - tech_fee),
                commission_amount: ActiveValue::Set(commission),
                tech_fee_amount: ActiveValue::Set(tech_fee),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_order_item(
        &self,
        order_id: i32,
        product_id: Option<i32>,
        product_name: &str,
        price: i64,
        quantity: i32,
    ) -> Result<entity::order_item::Model, TestError> {
        Ok(
            entity::prelude::OrderItem::insert(entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                product_id: ActiveValue::Set(product_id),
                product_name: ActiveValue::Set(product_name.to_string()),
                product_image: ActiveValue::Set(None),
                price: ActiveValue::Set(Decimal::from(price)),
                quantity: ActiveValue::Set(quantity),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_order_payment(
        &self,
        order_id: i32,
        amount: i64,
        paid: bool,
    ) -> Result<entity::order_payment::Model, TestError> {
        Ok(
            entity::prelude::OrderPayment::insert(entity::order_payment::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                amount: ActiveValue::Set(Decimal::from(amount)),
                mode: ActiveValue::Set("cod".to_string()),
                paid: ActiveValue::Set(paid),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a payout owing `final_amount` with no commission or fees recorded
    pub async fn insert_payout(
        &self,
        seller_id: i32,
        final_amount: i64,
        payout_status: PayoutStatus,
    ) -> Result<entity::seller_payout::Model, TestError> {
        let now = Utc::now().naive_utc();
        let released_at = match payout_status {
            PayoutStatus::Released => Some(now),
            PayoutStatus::Pending => None,
        };

        Ok(
            entity::prelude::SellerPayout::insert(entity::seller_payout::ActiveModel {
                seller_id: ActiveValue::Set(seller_id),
                total_order_amount: ActiveValue::Set(Decimal::from(final_amount)),
                total_commission_amount: ActiveValue::Set(Decimal::ZERO),
                total_tech_fee_amount: ActiveValue::Set(Decimal::ZERO),
                final_payout_amount: ActiveValue::Set(Decimal::from(final_amount)),
                payout_status: ActiveValue::Set(payout_status),
                released_at: ActiveValue::Set(released_at),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
