//! Seller console endpoints.
//!
//! Every handler first resolves the caller's seller row and scopes its work to it.

/// Seller overview
pub mod dashboard;
/// Orders placed with the caller
pub mod order;
/// Catalog search and the caller's listings
pub mod product;

/// OpenAPI tag for the seller console routes
pub static SELLER_TAG: &str = "seller";
