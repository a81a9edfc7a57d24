//! Persistence layer: connection pool, migrations, models, and repositories.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

pub const MEMBERS_TABLE: &str = "Members";
pub const WORKOUT_SESSIONS_TABLE: &str = "WorkoutSessions";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Confirm `table` exists and is readable by the pool's role.
///
/// `table` is interpolated as a quoted identifier, so only pass one of the
/// fixed table names, never caller input.
pub async fn table_check(pool: &DbPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(r#"SELECT 1 FROM "{table}" LIMIT 1"#))
        .execute(pool)
        .await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
