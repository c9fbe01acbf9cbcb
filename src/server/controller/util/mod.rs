//! Utility functions for controller request handling.
//!
//! Helpers for reading the logged in caller out of the session and enforcing the role a
//! handler requires. The access gate already redirects callers away from the consoles, these
//! checks keep handlers safe when they are mounted without it.

/// Session lookups shared by the handlers
pub mod session;
