//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored through tower-sessions (Valkey backed in
//! production, in-memory in tests).

/// Logged in user ID stored in the session
pub mod user;
