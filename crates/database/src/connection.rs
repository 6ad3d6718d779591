use crate::error::DbError;
use crate::memory::InMemoryStore;
use crate::repository::DbRepository;
use crate::store::MarksStore;
use configuration::{DatabaseSettings, StoreBackend};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The URL comes from `database.url`, or `DATABASE_URL` when that is unset.
/// The caller owns the pool and is expected to close it at shutdown.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let database_url = settings.resolved_url().ok_or_else(|| {
        DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string())
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Opens the store selected by `database.backend`.
///
/// This is the single place the process acquires its store handle; the
/// result is injected into the service and closed by the entry point.
pub async fn open_store(settings: &DatabaseSettings) -> Result<Arc<dyn MarksStore>, DbError> {
    match settings.backend {
        StoreBackend::Postgres => {
            let pool = connect(settings).await?;
            if settings.run_migrations {
                run_migrations(&pool).await?;
                tracing::info!("Database migrations applied.");
            }
            tracing::info!(
                max_connections = settings.max_connections,
                "Connected to PostgreSQL."
            );
            Ok(Arc::new(DbRepository::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; records will not survive a restart.");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
