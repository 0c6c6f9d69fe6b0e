use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required for the postgres backend)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_MIGRATIONS: migrations directory, applied on startup when set
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for the postgres backend"))?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Ok(migrations) = env::var("DATABASE_MIGRATIONS") {
        run_migrations(&pool, &migrations).await?;
    }

    Ok(pool)
}
