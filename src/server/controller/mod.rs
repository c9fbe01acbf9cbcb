//! HTTP controller endpoints for the Bazaar web API.
//!
//! Axum handlers for login, account self-service and the admin and seller consoles.
//! Controllers read the caller from the tower-sessions session, delegate to services and
//! return JSON DTOs. Every handler is documented for OpenAPI with utoipa.

/// Routes for the logged in user's own profile
pub mod account;
pub mod admin;
/// Login, logout and gate landing routes
pub mod auth;
pub mod seller;
pub mod util;
