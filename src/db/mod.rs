//! Database module
//!
//! Connection pooling, embedded migrations, repositories, and the
//! Postgres-backed view used by the enrollment rules.

pub mod connection;
pub mod enrollment_store;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;
pub use enrollment_store::PgEnrollmentStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
