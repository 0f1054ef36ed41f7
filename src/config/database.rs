//! PostgreSQL connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//! This function should be called once during startup; the returned pool
//! is cheaply cloneable and is shared through [`crate::state::AppState`].

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails. The
/// server cannot run without its database, so startup aborts early.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
