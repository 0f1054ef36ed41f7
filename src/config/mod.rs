//! Configuration modules for the HDmobil API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables via a `from_env()` constructor:
//!
//! - [`cors`]: CORS allow-list for the storefront and admin origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`registry`]: Slovak business-register lookup endpoint
//! - [`supabase`]: Identity-provider (GoTrue) endpoint and keys

pub mod cors;
pub mod database;
pub mod registry;
pub mod supabase;
