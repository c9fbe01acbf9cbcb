//! Order financial split and seller payout arithmetic.
//!
//! When an order is placed its subtotal is divided between the seller, the platform
//! commission and the tech fee, and the split is frozen on the order row. Payouts later
//! sum the frozen amounts of a seller's delivered orders.
//!
//! All amounts are rounded to 2 decimal places, midpoint away from zero.

use entity::sea_orm_active_enums::{OrderStatus, TechFeeType};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::server::error::{finance::FinanceError, seller::SellerError};

/// Commercial terms a seller is onboarded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerTerms {
    /// Percentage of the subtotal kept by the marketplace
    pub commission_percentage: Decimal,
    /// Whether the tech fee is charged per order or once per payout
    pub tech_fee_type: TechFeeType,
    /// Fee charged per order or per payout depending on `tech_fee_type`
    pub tech_fee_amount: Decimal,
}

impl From<&entity::seller::Model> for SellerTerms {
    fn from(seller: &entity::seller::Model) -> Self {
        Self {
            commission_percentage: seller.commission_percentage,
            tech_fee_type: seller.tech_fee_type,
            tech_fee_amount: seller.tech_fee_amount,
        }
    }
}

impl SellerTerms {
    /// Rejects commission outside 0 to 100 percent and negative tech fees
    pub fn validate(&self) -> Result<(), SellerError> {
        if self.commission_percentage < Decimal::ZERO
            || self.commission_percentage > Decimal::ONE_HUNDRED
        {
            return Err(SellerError::InvalidCommission);
        }

        if self.tech_fee_amount < Decimal::ZERO {
            return Err(SellerError::InvalidTechFee);
        }

        Ok(())
    }
}

/// Frozen financial fields of a single order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSplit {
    /// Sum of the item prices
    pub subtotal: Decimal,
    /// Delivery fee charged on top of the subtotal
    pub delivery_fee: Decimal,
    /// Amount paid by the customer, subtotal plus delivery fee
    pub total: Decimal,
    /// Marketplace commission on the subtotal
    pub commission_amount: Decimal,
    /// Per-order tech fee, zero for sellers on a fixed fee
    pub tech_fee_amount: Decimal,
    /// What remains for the seller after commission and tech fee
    pub seller_price_amount: Decimal,
}

impl OrderSplit {
    /// Whether the split adds up, see [`amounts_reconcile`]
    pub fn reconciles(&self) -> bool {
        amounts_reconcile(
            self.subtotal,
            self.delivery_fee,
            self.total,
            self.seller_price_amount,
            self.commission_amount,
            self.tech_fee_amount,
        )
    }
}

/// Rounds to two decimal places, halves away from zero
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits an order subtotal according to the seller's terms.
///
/// Per-order tech fees are charged on every order. Fixed tech fees are charged once per
/// payout instead, so they contribute nothing here.
///
/// Orders are placed by the storefront, which freezes this split on the order row; this
/// backend never creates orders. The function is the reference for that frozen split and
/// is only called from tests, alongside [`reconcile`] which checks stored orders.
///
/// # Returns
/// - `Ok(OrderSplit)` - split that reconciles against the subtotal
/// - `Err(FinanceError::NegativeAmount)` - negative subtotal or delivery fee
/// - `Err(FinanceError::FeesExceedSubtotal)` - commission plus tech fee exceed the subtotal
pub fn split_order(
    subtotal: Decimal,
    delivery_fee: Decimal,
    terms: &SellerTerms,
) -> Result<OrderSplit, FinanceError> {
    if subtotal < Decimal::ZERO || delivery_fee < Decimal::ZERO {
        return Err(FinanceError::NegativeAmount);
    }

    let subtotal = round2(subtotal);
    let delivery_fee = round2(delivery_fee);
    let commission_amount = round2(subtotal * terms.commission_percentage / Decimal::ONE_HUNDRED);
    let tech_fee_amount = match terms.tech_fee_type {
        TechFeeType::PerOrder => round2(terms.tech_fee_amount),
        TechFeeType::Fixed => Decimal::ZERO,
    };

    let seller_price_amount = subtotal - commission_amount - tech_fee_amount;
    if seller_price_amount < Decimal::ZERO {
        return Err(FinanceError::FeesExceedSubtotal);
    }

    Ok(OrderSplit {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
        commission_amount,
        tech_fee_amount,
        seller_price_amount,
    })
}

/// Whether a stored order's frozen split adds up
pub fn reconcile(order: &entity::orders::Model) -> bool {
    amounts_reconcile(
        order.subtotal,
        order.delivery_fee,
        order.total,
        order.seller_price_amount,
        order.commission_amount,
        order.tech_fee_amount,
    )
}

fn amounts_reconcile(
    subtotal: Decimal,
    delivery_fee: Decimal,
    total: Decimal,
    seller_price: Decimal,
    commission: Decimal,
    tech_fee: Decimal,
) -> bool {
    total == subtotal + delivery_fee && seller_price + commission + tech_fee == subtotal
}

/// Amounts owed to a seller for a settlement period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTotals {
    /// Number of delivered orders in the period
    pub order_count: usize,
    /// Sum of the delivered orders' subtotals
    pub total_order_amount: Decimal,
    /// Sum of the commission taken on those orders
    pub total_commission_amount: Decimal,
    /// Per-order tech fees, or the fixed fee once for the period
    pub total_tech_fee_amount: Decimal,
    /// Order amount less commission and tech fees
    pub final_payout_amount: Decimal,
}

/// Sums the delivered orders of a settlement period.
///
/// Orders in any other status are skipped. Sellers on a fixed tech fee are charged it once
/// for the whole payout, provided at least one order was delivered.
pub fn aggregate_payout(orders: &[entity::orders::Model], terms: &SellerTerms) -> PayoutTotals {
    let delivered: Vec<&entity::orders::Model> = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Delivered)
        .collect();

    let total_order_amount: Decimal = delivered.iter().map(|order| order.subtotal).sum();
    let total_commission_amount: Decimal =
        delivered.iter().map(|order| order.commission_amount).sum();
    let total_tech_fee_amount = match terms.tech_fee_type {
        TechFeeType::PerOrder => delivered.iter().map(|order| order.tech_fee_amount).sum(),
        TechFeeType::Fixed if !delivered.is_empty() => round2(terms.tech_fee_amount),
        TechFeeType::Fixed => Decimal::ZERO,
    };

    PayoutTotals {
        order_count: delivered.len(),
        total_order_amount,
        total_commission_amount,
        total_tech_fee_amount,
        final_payout_amount: total_order_amount - total_commission_amount - total_tech_fee_amount,
    }
}
