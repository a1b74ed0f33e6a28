//! Storage layer: PostgreSQL pool management, migrations, models, and
//! repositories.
//!
//! Repositories are zero-sized structs with async methods taking `&PgPool`
//! as the first argument. All reads and writes are keyed by organisation id
//! and entity id; id uniqueness comes from BIGSERIAL primary keys and
//! insertion order is preserved via `created_at` / id ordering.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
