//! Business rules expressed as pure functions.
//!
//! Nothing in this module touches the database or the session. Services consult these
//! rules before writing, which keeps every decision unit-testable in isolation.

pub mod access;
pub mod finance;
pub mod order_status;
pub mod pricing;
pub mod support;
