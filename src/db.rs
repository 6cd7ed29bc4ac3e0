//! Database connection pool and migration management.
//!
//! Both functions here run once at startup; any failure aborts the process
//! before the server starts listening.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool shared across requests.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// Connections are created lazily and reused across requests by every
/// service operation; PostgreSQL itself provides whatever isolation
/// concurrent requests get.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server is
/// unreachable.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// The macro embeds the migration files at compile time. Executed
/// migrations are tracked in the `_sqlx_migrations` table, so re-running at
/// every startup is idempotent.
///
/// Migration files follow the `<timestamp>_<name>.sql` naming scheme.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
