//! Server application models and type definitions.
//!
//! Application state shared by every handler and the typed wrappers used to read and write
//! session data.

/// Shared application state
pub mod app;
pub mod session;
