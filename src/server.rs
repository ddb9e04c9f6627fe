//! Startup wiring: database pool, migrations, services, Axum lifecycle.

use crate::application::services::{
    AuthService, FileService, HealthService, RegistrationService, ResolutionService, StatusService,
};
use crate::config::Config;
use crate::infrastructure::object_store::FsObjectStore;
use crate::infrastructure::persistence::{
    PgCallLogRepository, PgFileRepository, PgHealthRepository, PgLinkRepository,
    PgTokenRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Brings the service up and runs it until ctrl-c.
///
/// Connects the Postgres pool, applies embedded migrations, wires every
/// repository and service into [`AppState`], then serves the router on
/// `config.listen_addr`. Shutdown is graceful; in-flight requests finish
/// first.
///
/// # Errors
///
/// Returns an error when the database is unreachable, a migration fails,
/// the listen address cannot be bound, or the server itself errors.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let call_log_repository = Arc::new(PgCallLogRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));
    let file_repository = Arc::new(PgFileRepository::new(pool.clone()));
    let health_repository = Arc::new(PgHealthRepository::new(pool.clone()));
    let object_store = Arc::new(FsObjectStore::new(config.file_store_root.clone()));

    let state = AppState::new(
        Arc::new(RegistrationService::new(link_repository.clone())),
        Arc::new(ResolutionService::new(
            link_repository.clone(),
            call_log_repository.clone(),
        )),
        Arc::new(StatusService::new(link_repository, call_log_repository)),
        Arc::new(AuthService::new(
            user_repository,
            token_repository,
            config.auth_secret.clone(),
        )),
        Arc::new(FileService::new(file_repository, object_store)),
        Arc::new(HealthService::new(health_repository)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
