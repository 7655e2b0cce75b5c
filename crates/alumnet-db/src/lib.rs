//! # Alumnet DB
//!
//! Database pool, migrations and listing execution for the Alumnet API.
//!
//! # Example
//!
//! ```ignore
//! use alumnet_config::DatabaseConfig;
//! use alumnet_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod listing;

use std::time::Duration;

use alumnet_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use errors::{Violation, storage, violation};
pub use listing::execute;
// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be created once at startup
/// and shared through the application state.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if no connection can be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections.max(2))
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies every pending migration from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
