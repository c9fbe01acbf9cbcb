//! Service layer for business rules.
//!
//! Services validate input, apply the rules in [`crate::server::policy`] and coordinate
//! repositories. Each service borrows the database connection for the duration of a
//! request and returns DTOs ready to be serialized by the controllers.

pub mod area;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod order;
pub mod payout;
pub mod role;
pub mod seller;
pub mod seller_catalog;
pub mod support;
pub mod user;
