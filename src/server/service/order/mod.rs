//! Order listing, detail and status transitions.
//!
//! Status writes go through [`OrderService::update_status`], which validates the
//! transition against [`crate::server::policy::order_status`] and then writes it with a
//! compare-and-set on the status the caller saw.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::{PageRequest, Paginated},
        order::{
            AddressDto, OrderDetailDto, OrderDto, OrderFilterParams, OrderItemDto,
            OrderPaymentDto, SellerOrderDto,
        },
        seller::SellerSummaryDto,
    },
    server::{
        data::{
            address::AddressRepository,
            order::{OrderFilter, OrderRepository},
        },
        error::{order::OrderError, Error},
        policy::{finance::reconcile, order_status::check_transition},
        util::time::{day_window, start_of_day, today_window},
    },
};

/// Who is asking for a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActor {
    Admin,
    /// A seller, identified by their seller row ID
    Seller(i32),
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Filtered, paginated order list for the admin console, newest first.
    ///
    /// `start_date` and `end_date` are inclusive calendar days.
    ///
    /// # Returns
    /// - `Ok(Paginated<OrderDto>)` - Requested page and the total match count
    /// - `Err(Error::OrderError(OrderError::InvalidDateRange))` - Start date after end date
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn list(&self, params: OrderFilterParams) -> Result<Paginated<OrderDto>, Error> {
        let order_repo = OrderRepository::new(self.db);

        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if start > end {
                return Err(OrderError::InvalidDateRange { start, end }.into());
            }
        }

        let created_until = match params.end_date {
            Some(end) => Some(day_window(end, end)?.1),
            None => None,
        };

        let filter = OrderFilter {
            created_from: params.start_date.map(start_of_day),
            created_until,
            delivery_slot: params.slot.filter(|slot| !slot.trim().is_empty()),
            status: params.status,
            search: params.search,
        };
        let page = PageRequest::new(params.page, params.per_page);

        let (orders, total) = order_repo.list(&filter, page).await?;

        Ok(page.wrap(orders.into_iter().map(OrderDto::from).collect(), total))
    }

    /// Orders placed today that are not yet delivered or cancelled
    pub async fn live(&self) -> Result<Vec<OrderDto>, Error> {
        let order_repo = OrderRepository::new(self.db);

        let (from, until) = today_window(Utc::now().naive_utc())?;
        let orders = order_repo.open_between(from, until).await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Full order view with items, payments, delivery address and seller.
    ///
    /// # Returns
    /// - `Ok(OrderDetailDto)` - Order found
    /// - `Err(Error::OrderError(OrderError::NotFound))` - No order with this ID
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn detail(&self, order_id: i32) -> Result<OrderDetailDto, Error> {
        let order_repo = OrderRepository::new(self.db);
        let address_repo = AddressRepository::new(self.db);

        let Some((order, maybe_seller)) = order_repo.get_with_seller(order_id).await? else {
            return Err(OrderError::NotFound(order_id).into());
        };

        let items = order_repo.items(order.id).await?;
        let payments = order_repo.payments(order.id).await?;
        let address = match order.address_id {
            Some(address_id) => address_repo.get(address_id).await?,
            None => None,
        };

        let reconciled = reconcile(&order);
        if !reconciled {
            tracing::warn!(
                "Order ID {} has a financial split that does not add up to its totals",
                order.id
            );
        }

        Ok(OrderDetailDto {
            order: OrderDto::from(order),
            items: items.into_iter().map(OrderItemDto::from).collect(),
            payments: payments.into_iter().map(OrderPaymentDto::from).collect(),
            address: address.map(AddressDto::from),
            seller: maybe_seller.map(SellerSummaryDto::from),
            reconciled,
        })
    }

    /// Moves an order to status `to`.
    ///
    /// Sellers may only move orders assigned to them. The write only succeeds if the
    /// order still holds the status it was read with.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order after the transition
    /// - `Err(Error::OrderError(OrderError::NotFound))` - No order with this ID
    /// - `Err(Error::OrderError(OrderError::NotOwned))` - Seller does not fulfil this order
    /// - `Err(Error::OrderError(OrderError::InvalidTransition))` - Transition not allowed
    /// - `Err(Error::OrderError(OrderError::StatusChanged))` - Status changed concurrently
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn update_status(
        &self,
        order_id: i32,
        to: OrderStatus,
        actor: OrderActor,
    ) -> Result<OrderDto, Error> {
        let order_repo = OrderRepository::new(self.db);

        let Some(order) = order_repo.get(order_id).await? else {
            return Err(OrderError::NotFound(order_id).into());
        };

        if let OrderActor::Seller(seller_id) = actor {
            if order.seller_id != Some(seller_id) {
                return Err(OrderError::NotOwned {
                    order_id,
                    seller_id,
                }
                .into());
            }
        }

        check_transition(order.status, to)?;

        let result = order_repo.update_status(order_id, order.status, to).await?;

        let Some(updated) = order_repo.get(order_id).await? else {
            return Err(OrderError::NotFound(order_id).into());
        };

        if result.rows_affected == 0 {
            return Err(OrderError::StatusChanged(order_id).into());
        }

        tracing::info!(
            "Order {} moved from {:?} to {:?} by {:?}",
            updated.order_number,
            order.status,
            to,
            actor
        );

        Ok(OrderDto::from(updated))
    }

    /// Orders fulfilled by `seller_id`, newest first, each with its items
    pub async fn seller_orders(&self, seller_id: i32) -> Result<Vec<SellerOrderDto>, Error> {
        let order_repo = OrderRepository::new(self.db);

        let orders = order_repo.list_by_seller(seller_id).await?;
        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();

        let mut items_by_order: HashMap<i32, Vec<OrderItemDto>> = HashMap::new();
        for item in order_repo.items_for_orders(&order_ids).await? {
            items_by_order
                .entry(item.order_id)
                .or_default()
                .push(OrderItemDto::from(item));
        }

        Ok(orders
            .into_iter()
            .map(|order| SellerOrderDto {
                items: items_by_order.remove(&order.id).unwrap_or_default(),
                order: OrderDto::from(order),
            })
            .collect())
    }
}
