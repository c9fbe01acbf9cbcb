//! Admin console endpoints.
//!
//! Every handler requires the admin role. Routes live under `/admin`, which the access gate
//! already restricts to admins.

/// Delivery area management
pub mod area;
/// Category and product management
pub mod catalog;
/// Marketplace overview
pub mod dashboard;
/// Order board and status changes
pub mod order;
/// Seller payouts
pub mod payout;
/// Seller verification and terms
pub mod seller;
/// Support tickets and callback requests
pub mod support;
/// User lookup and role assignment
pub mod user;

/// OpenAPI tag for the admin console routes
pub static ADMIN_TAG: &str = "admin";
