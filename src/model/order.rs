use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::seller::SellerSummaryDto;

/// An order with its frozen financial split
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub seller_id: Option<i32>,
    pub area_id: Option<i32>,
    pub delivery_slot: String,
    pub payment_mode: String,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    #[schema(value_type = String, example = "confirmed")]
    pub status: OrderStatus,
    pub seller_price_amount: Decimal,
    pub commission_amount: Decimal,
    pub tech_fee_amount: Decimal,
    /// Payout that settled this order with the seller
    pub payout_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::orders::Model> for OrderDto {
    fn from(order: entity::orders::Model) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            user_id: order.user_id,
            seller_id: order.seller_id,
            area_id: order.area_id,
            delivery_slot: order.delivery_slot,
            payment_mode: order.payment_mode,
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            total: order.total,
            status: order.status,
            seller_price_amount: order.seller_price_amount,
            commission_amount: order.commission_amount,
            tech_fee_amount: order.tech_fee_amount,
            payout_id: order.payout_id,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Order together with the customer who placed it
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RecentOrderDto {
    #[serde(flatten)]
    pub order: OrderDto,
    /// `None` when the customer has no profile
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

/// A line item with its price frozen at order time
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub product_image: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<entity::order_item::Model> for OrderItemDto {
    fn from(item: entity::order_item::Model) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name,
            product_image: item.product_image,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// A payment attempt against an order
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderPaymentDto {
    pub id: i32,
    pub amount: Decimal,
    pub mode: String,
    pub paid: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::order_payment::Model> for OrderPaymentDto {
    fn from(payment: entity::order_payment::Model) -> Self {
        Self {
            id: payment.id,
            amount: payment.amount,
            mode: payment.mode,
            paid: payment.paid,
            created_at: payment.created_at,
        }
    }
}

/// A customer delivery address
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    pub id: i32,
    pub house_no: String,
    pub landmark: Option<String>,
    pub area: String,
    pub pincode: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub is_default: bool,
}

impl From<entity::address::Model> for AddressDto {
    fn from(address: entity::address::Model) -> Self {
        Self {
            id: address.id,
            house_no: address.house_no,
            landmark: address.landmark,
            area: address.area,
            pincode: address.pincode,
            name: address.name,
            phone: address.phone,
            is_default: address.is_default,
        }
    }
}

/// Full order view for the admin console
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
    pub payments: Vec<OrderPaymentDto>,
    pub address: Option<AddressDto>,
    pub seller: Option<SellerSummaryDto>,
    /// Whether the stored financial split adds up to the stored totals
    pub reconciled: bool,
}

/// An order as seen by the seller fulfilling it
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SellerOrderDto {
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}

/// Move an order to a new status
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    #[schema(value_type = String, example = "processing")]
    pub status: OrderStatus,
}

/// Query string of the admin order list
#[derive(Default, Deserialize, IntoParams)]
pub struct OrderFilterParams {
    /// First day (inclusive) of the creation date window
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// Last day (inclusive) of the creation date window
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    /// Delivery slot, e.g. `morning`
    pub slot: Option<String>,
    #[param(value_type = Option<String>)]
    pub status: Option<OrderStatus>,
    /// Substring of the order number
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}
