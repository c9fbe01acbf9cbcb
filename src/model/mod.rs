//! Data transfer objects exchanged with API clients.

/// Pagination and error envelopes
pub mod api;
/// Phone OTP login
pub mod auth;
/// Categories, products and seller listings
pub mod catalog;
/// Admin and seller dashboards
pub mod dashboard;
/// Orders and their filters
pub mod order;
/// Seller payouts
pub mod payout;
/// Sellers and delivery areas
pub mod seller;
/// Support tickets and callback requests
pub mod support;
/// Profiles and roles
pub mod user;
