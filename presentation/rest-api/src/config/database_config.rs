use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - MIGRATIONS_PATH: SQL migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self::from_values(
            url,
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        ))
    }

    fn from_values(
        url: String,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Self {
        Self {
            url,
            max_connections: max_connections
                .and_then(|value| value.parse().ok())
                .unwrap_or(5),
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        }
    }
}

/// Initialize database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails,
/// or a migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_env()?;
    let config = DatabaseConfig::new(settings.url).with_max_connections(settings.max_connections);

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "database ready"
    );
    Ok(pool)
}
