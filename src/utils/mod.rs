//! Shared utilities used throughout the application:
//!
//! - [`errors`]: Application error type and HTTP status mapping
//! - [`pagination`]: Request pagination utilities

pub mod errors;
pub mod pagination;
