//! Utility functions and helpers for server operations.
//!
//! Small pure helpers shared by services: phone number normalization, one-time passcode
//! generation and hashing, category slugs, and calendar day windows used by date filters.

/// Login code generation and hashing
pub mod otp;
/// Phone number normalization
pub mod phone;
/// URL slugs for category names
pub mod slug;
pub mod time;
