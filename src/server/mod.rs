//! Server application core modules.
//!
//! This module contains all server-side functionality for the Bazaar marketplace backend:
//! HTTP routing, the role based access gate, phone OTP authentication, business services and
//! database repositories for orders, sellers, the catalog, payouts and support workflows.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod policy;
pub mod router;
pub mod service;
pub mod sms;
/// Connection setup for the database, session store and SMS gateway
pub mod startup;
pub mod util;
