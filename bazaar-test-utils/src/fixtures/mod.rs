//! Test fixture modules for database and HTTP mock creation.
//!
//! - `auth` - OTP challenges
//! - `catalog` - categories, products and seller listings
//! - `order` - orders with their items, payments and seller payouts
//! - `seller` - areas and seller accounts
//! - `support` - support tickets and callback requests
//! - `user` - accounts, profiles, roles and addresses

pub mod auth;
pub mod catalog;
pub mod order;
pub mod seller;
pub mod support;
pub mod user;
