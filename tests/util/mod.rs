//! Shared helpers for integration tests.

mod test_utils;

pub use test_utils::{json_body, TestContextExt};
