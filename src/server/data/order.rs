use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use migration::Expr;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, UpdateResult,
};

use crate::{
    model::api::PageRequest,
    server::{data::contains_ignore_case, policy::order_status::OPEN_STATUSES},
};

/// Which orders an order list query returns
#[derive(Debug, Default, Clone)]
pub struct OrderFilter {
    /// Inclusive lower bound on `created_at`
    pub created_from: Option<NaiveDateTime>,
    /// Exclusive upper bound on `created_at`
    pub created_until: Option<NaiveDateTime>,
    /// Exact delivery slot label
    pub delivery_slot: Option<String>,
    /// Only orders in this status
    pub status: Option<OrderStatus>,
    /// Case-insensitive match against the order number
    pub search: Option<String>,
}

impl OrderFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(from) = self.created_from {
            condition = condition.add(entity::orders::Column::CreatedAt.gte(from));
        }
        if let Some(until) = self.created_until {
            condition = condition.add(entity::orders::Column::CreatedAt.lt(until));
        }
        if let Some(slot) = &self.delivery_slot {
            condition = condition.add(entity::orders::Column::DeliverySlot.eq(slot.as_str()));
        }
        if let Some(status) = self.status {
            condition = condition.add(entity::orders::Column::Status.eq(status));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            condition = condition.add(contains_ignore_case(
                entity::orders::Column::OrderNumber,
                search,
            ));
        }

        condition
    }
}

/// Repository for orders and their items and payments
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get an order by ID
    pub async fn get(&self, order_id: i32) -> Result<Option<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find_by_id(order_id).one(self.db).await
    }

    /// Get an order together with the seller fulfilling it
    pub async fn get_with_seller(
        &self,
        order_id: i32,
    ) -> Result<Option<(entity::orders::Model, Option<entity::seller::Model>)>, DbErr> {
        entity::prelude::Orders::find_by_id(order_id)
            .find_also_related(entity::seller::Entity)
            .one(self.db)
            .await
    }

    /// One page of orders matching the filter, newest first, with the total match count
    pub async fn list(
        &self,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> Result<(Vec<entity::orders::Model>, u64), DbErr> {
        let paginator = entity::prelude::Orders::find()
            .filter(filter.condition())
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page.index()).await?;

        Ok((orders, total))
    }

    /// Every order created in `[from, until)`, newest first
    pub async fn created_between(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::CreatedAt.gte(from))
            .filter(entity::orders::Column::CreatedAt.lt(until))
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .all(self.db)
            .await
    }

    /// The `limit` most recently placed orders, newest first
    pub async fn recent(&self, limit: u64) -> Result<Vec<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Orders created in `[from, until)` that are still being worked on, newest first
    pub async fn open_between(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::CreatedAt.gte(from))
            .filter(entity::orders::Column::CreatedAt.lt(until))
            .filter(entity::orders::Column::Status.is_in(OPEN_STATUSES))
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of orders in a non-terminal status
    pub async fn count_open(&self) -> Result<u64, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::Status.is_in(OPEN_STATUSES))
            .count(self.db)
            .await
    }

    /// Every order of a seller, newest first
    pub async fn list_by_seller(
        &self,
        seller_id: i32,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::SellerId.eq(seller_id))
            .order_by_desc(entity::orders::Column::CreatedAt)
            .order_by_desc(entity::orders::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of orders ever placed with a seller
    pub async fn count_by_seller(&self, seller_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::SellerId.eq(seller_id))
            .count(self.db)
            .await
    }

    /// Orders of a seller in `status`, optionally limited to those created in `[from, until)`
    pub async fn list_by_seller_and_status(
        &self,
        seller_id: i32,
        status: OrderStatus,
        created: Option<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        let mut query = entity::prelude::Orders::find()
            .filter(entity::orders::Column::SellerId.eq(seller_id))
            .filter(entity::orders::Column::Status.eq(status));

        if let Some((from, until)) = created {
            query = query
                .filter(entity::orders::Column::CreatedAt.gte(from))
                .filter(entity::orders::Column::CreatedAt.lt(until));
        }

        query
            .order_by_asc(entity::orders::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Delivered orders of a seller created in `[from, until)` that no payout covers yet
    pub async fn list_unsettled_delivered(
        &self,
        seller_id: i32,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        entity::prelude::Orders::find()
            .filter(entity::orders::Column::SellerId.eq(seller_id))
            .filter(entity::orders::Column::Status.eq(OrderStatus::Delivered))
            .filter(entity::orders::Column::PayoutId.is_null())
            .filter(entity::orders::Column::CreatedAt.gte(from))
            .filter(entity::orders::Column::CreatedAt.lt(until))
            .order_by_asc(entity::orders::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Attach orders to the payout settling them
    ///
    /// Orders already claimed by another payout are left alone; compare
    /// [`UpdateResult::rows_affected`] with the number of IDs to detect that.
    pub async fn settle(&self, order_ids: &[i32], payout_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Orders::update_many()
            .col_expr(entity::orders::Column::PayoutId, Expr::value(Some(payout_id)))
            .filter(entity::orders::Column::Id.is_in(order_ids.to_vec()))
            .filter(entity::orders::Column::PayoutId.is_null())
            .exec(self.db)
            .await
    }

    /// Unlink order items from a product leaving the catalog; the item keeps its name
    /// and price
    pub async fn detach_product(&self, product_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::OrderItem::update_many()
            .col_expr(
                entity::order_item::Column::ProductId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::order_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await
    }

    /// Line items of an order
    pub async fn items(&self, order_id: i32) -> Result<Vec<entity::order_item::Model>, DbErr> {
        self.items_for_orders(&[order_id]).await
    }

    /// Line items of many orders at once
    pub async fn items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<entity::order_item::Model>, DbErr> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.to_vec()))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Payment attempts of an order, oldest first
    pub async fn payments(&self, order_id: i32) -> Result<Vec<entity::order_payment::Model>, DbErr> {
        entity::prelude::OrderPayment::find()
            .filter(entity::order_payment::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_payment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Move an order from `from` to `to` only if it is still in `from`
    ///
    /// Check [`UpdateResult::rows_affected`]: zero means the order is missing or another
    /// writer changed its status first.
    pub async fn update_status(
        &self,
        order_id: i32,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Orders::update_many()
            .col_expr(entity::orders::Column::Status, Expr::value(to))
            .col_expr(
                entity::orders::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::orders::Column::Id.eq(order_id))
            .filter(entity::orders::Column::Status.eq(from))
            .exec(self.db)
            .await
    }
}
