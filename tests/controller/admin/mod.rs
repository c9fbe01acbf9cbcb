//! Tests for admin console endpoints.

mod catalog;
mod order;
mod payout;
mod seller;
mod support;
mod user;

use super::*;
