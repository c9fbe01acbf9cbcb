//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! they run equally against a pooled connection or inside a transaction, and each method is
//! a single statement. Conditional updates report the affected row count so services can tell
//! a lost race from a missing row.

/// Login accounts
pub mod account;
/// Customer addresses
pub mod address;
/// Delivery areas
pub mod area;
/// Callback requests
pub mod callback_request;
/// Catalog categories
pub mod category;
/// Orders, order items and payments
pub mod order;
/// Issued login codes
pub mod otp_challenge;
/// Seller payouts
pub mod payout;
/// Catalog products
pub mod product;
/// User profiles
pub mod profile;
/// Sellers
pub mod seller;
/// Seller listings
pub mod seller_price;
/// Support tickets
pub mod support_ticket;
/// User roles
pub mod user_role;

use migration::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, DbErr, SqlErr};

/// Case-insensitive substring match on a text column
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, needle: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", needle.to_lowercase()))
}

/// Whether a write was refused by a unique index
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
