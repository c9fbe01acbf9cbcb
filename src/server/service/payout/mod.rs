//! Seller payouts.
//!
//! A payout settles a seller's delivered orders over a range of days. Each order records
//! the payout that settled it, so an order is paid out at most once however the windows
//! overlap. Payouts are created pending and released by hand once the money has been
//! transferred; release is a conditional write, so a payout can only ever be released once.

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::payout::{CreatePayoutDto, PayoutDto},
    server::{
        data::{order::OrderRepository, payout::PayoutRepository, seller::SellerRepository},
        error::{finance::FinanceError, seller::SellerError, Error},
        policy::finance::{aggregate_payout, SellerTerms},
        util::time::day_window,
    },
};

pub struct PayoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayoutService<'a> {
    /// Creates a new instance of [`PayoutService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every payout newest first with the name of the seller it is owed to
    pub async fn list(&self) -> Result<Vec<PayoutDto>, Error> {
        let payout_repo = PayoutRepository::new(self.db);

        let payouts = payout_repo.list_with_seller().await?;

        Ok(payouts
            .into_iter()
            .map(|(payout, seller)| PayoutDto::new(payout, seller.map(|s| s.seller_name)))
            .collect())
    }

    /// Creates a pending payout for the seller's delivered orders between two inclusive days.
    ///
    /// Orders settled by an earlier payout are skipped. The payout and the claim on its
    /// orders are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(PayoutDto)` - Payout created
    /// - `Err(Error::FinanceError(FinanceError::InvalidPayoutWindow))` - Start after end
    /// - `Err(Error::SellerError(SellerError::NotFound))` - Unknown seller
    /// - `Err(Error::FinanceError(FinanceError::EmptyPayoutWindow))` - Nothing left to settle
    /// - `Err(Error::FinanceError(FinanceError::OrdersAlreadySettled))` - A concurrent payout
    ///   claimed some of the orders first
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn create(&self, create: CreatePayoutDto) -> Result<PayoutDto, Error> {
        if create.start_date > create.end_date {
            return Err(FinanceError::InvalidPayoutWindow {
                start: create.start_date,
                end: create.end_date,
            }
            .into());
        }

        let Some(seller) = SellerRepository::new(self.db).get(create.seller_id).await? else {
            return Err(SellerError::NotFound(create.seller_id).into());
        };

        let (from, until) = day_window(create.start_date, create.end_date)?;

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);
        let payout_repo = PayoutRepository::new(&txn);

        let orders = order_repo
            .list_unsettled_delivered(seller.id, from, until)
            .await?;

        let totals = aggregate_payout(&orders, &SellerTerms::from(&seller));
        if totals.order_count == 0 {
            txn.rollback().await?;

            return Err(FinanceError::EmptyPayoutWindow(seller.id).into());
        }

        let payout = payout_repo.create(seller.id, &totals).await?;

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let settled = order_repo.settle(&order_ids, payout.id).await?;
        if settled.rows_affected != order_ids.len() as u64 {
            txn.rollback().await?;

            return Err(FinanceError::OrdersAlreadySettled(seller.id).into());
        }

        txn.commit().await?;

        tracing::info!(
            "Created payout ID {} of {} for seller ID {} covering {} orders",
            payout.id,
            payout.final_payout_amount,
            seller.id,
            totals.order_count
        );

        Ok(PayoutDto::new(payout, Some(seller.seller_name)))
    }

    /// Marks a pending payout as released now.
    ///
    /// # Returns
    /// - `Ok(PayoutDto)` - Payout released
    /// - `Err(Error::FinanceError(FinanceError::PayoutNotFound))` - Unknown payout
    /// - `Err(Error::FinanceError(FinanceError::PayoutAlreadyReleased))` - Not pending anymore
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn release(&self, payout_id: i32) -> Result<PayoutDto, Error> {
        let payout_repo = PayoutRepository::new(self.db);
        let seller_repo = SellerRepository::new(self.db);

        let result = payout_repo
            .release(payout_id, Utc::now().naive_utc())
            .await?;

        let Some(payout) = payout_repo.get(payout_id).await? else {
            return Err(FinanceError::PayoutNotFound(payout_id).into());
        };

        if result.rows_affected == 0 {
            return Err(FinanceError::PayoutAlreadyReleased(payout_id).into());
        }

        tracing::info!(
            "Released payout ID {} of {} to seller ID {}",
            payout.id,
            payout.final_payout_amount,
            payout.seller_id
        );

        let seller_name = seller_repo
            .get(payout.seller_id)
            .await?
            .map(|s| s.seller_name);

        Ok(PayoutDto::new(payout, seller_name))
    }
}
