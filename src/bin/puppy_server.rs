//! Puppy API server
//!
//! Serves `/puppies` on `PORT` (default 5001). With `DATABASE_URL` set and the
//! `postgres` feature enabled the records live in PostgreSQL, otherwise in
//! process memory.

use puppy::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let service = open_store(&config)?;

    ServerBuilder::new()
        .with_shared_service(service)
        .serve(config.listen_addr())
        .await
}

/// Pick the store from the configuration.
///
/// The PostgreSQL pool connects lazily: startup never waits for the database,
/// and an unreachable one only shows up as a logged error and failing requests.
fn open_store(config: &ServerConfig) -> Result<Arc<dyn PuppyService>> {
    match config.database_url.as_deref() {
        #[cfg(feature = "postgres")]
        Some(url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect_lazy(url)?;

            let check = pool.clone();
            tokio::spawn(async move {
                match ensure_schema(&check).await {
                    Ok(()) => tracing::info!("Database connected!"),
                    Err(e) => tracing::error!(error = %e, "Database connection error"),
                }
            });

            Ok(Arc::new(PostgresPuppyService::new(pool)))
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => {
            tracing::warn!(
                "DATABASE_URL is set but the postgres feature is disabled; using in-memory storage"
            );
            Ok(Arc::new(InMemoryPuppyService::new()))
        }
        None => {
            tracing::info!("DATABASE_URL not set; using in-memory storage");
            Ok(Arc::new(InMemoryPuppyService::new()))
        }
    }
}
