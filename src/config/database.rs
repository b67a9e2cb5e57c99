//! PostgreSQL connection pool initialization.
//!
//! The connection string comes from `DATABASE_URL`. The pool is created once
//! during startup, is cheaply cloneable, and is shared across request
//! handlers through the application state.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
/// There is nothing useful the server can do without its store.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
