//! Application setup and wiring

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::application::landscape::{FetchLandscapeUseCase, SyncLandscapeUseCase};
use crate::config::Config;
use crate::domain::catalog::{IEnterpriseSolutionRepository, IProjectRepository};
use crate::infrastructure::landscape::LandscapeClient;
use crate::infrastructure::persistence::{
    self, SqlxEnterpriseSolutionRepository, SqlxProjectRepository,
};
use crate::presentation::controllers::AppState;
use crate::presentation::routes::create_router;

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Spawns a background worker that keeps the catalog in sync with the
/// published landscape. Respects the cancellation token for graceful
/// shutdown.
fn spawn_sync_worker(
    sync_use_case: Arc<SyncLandscapeUseCase>,
    config: &Config,
    shutdown_token: CancellationToken,
) {
    let sync_config = config.sync.clone();
    let is_syncing = Arc::new(AtomicBool::new(false));

    // Perform initial sync if configured
    if sync_config.on_startup {
        let use_case = sync_use_case.clone();
        let is_syncing_startup = is_syncing.clone();
        let token = shutdown_token.clone();

        tokio::spawn(async move {
            if token.is_cancelled() {
                return;
            }

            is_syncing_startup.store(true, Ordering::SeqCst);
            tracing::info!("Starting initial landscape sync...");

            tokio::select! {
                result = use_case.execute() => {
                    match result {
                        Ok(outcome) => {
                            tracing::info!(
                                imported = outcome.imported,
                                "Initial landscape sync completed successfully"
                            );
                        }
                        Err(e) => {
                            tracing::warn!("Initial landscape sync failed (non-fatal): {}", e);
                        }
                    }
                }
                _ = token.cancelled() => {
                    tracing::info!("Initial sync cancelled due to shutdown");
                }
            }

            is_syncing_startup.store(false, Ordering::SeqCst);
        });
    }

    // Spawn periodic sync worker
    if sync_config.interval_hours > 0 {
        let interval = Duration::from_secs(sync_config.interval_hours * 3600);
        let token = shutdown_token;

        tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);
            // Skip the first immediate tick since startup sync is handled
            // separately
            interval_timer.tick().await;

            loop {
                tokio::select! {
                    _ = interval_timer.tick() => {
                        // Skip if already syncing
                        if is_syncing.swap(true, Ordering::SeqCst) {
                            tracing::debug!("Skipping periodic sync - already in progress");
                            continue;
                        }

                        tracing::info!("Starting periodic landscape sync...");

                        tokio::select! {
                            result = sync_use_case.execute() => {
                                match result {
                                    Ok(outcome) => {
                                        tracing::info!(
                                            imported = outcome.imported,
                                            "Periodic landscape sync completed successfully"
                                        );
                                    }
                                    Err(e) => {
                                        tracing::warn!("Periodic landscape sync failed (non-fatal): {}", e);
                                    }
                                }
                            }
                            _ = token.cancelled() => {
                                tracing::info!("Periodic sync cancelled due to shutdown");
                                is_syncing.store(false, Ordering::SeqCst);
                                return;
                            }
                        }

                        is_syncing.store(false, Ordering::SeqCst);
                    }
                    _ = token.cancelled() => {
                        tracing::info!("Sync worker shutting down gracefully");
                        return;
                    }
                }
            }
        });
    }
}

/// Create the application router and return an AppHandle for shutdown
/// coordination
pub async fn create_app(
    config: Config,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let startup_time = Instant::now();
    let config_arc = Arc::new(config.clone());
    let shutdown_token = CancellationToken::new();

    // Initialize database pool and bring the schema up to date
    let pool = Arc::new(persistence::init_pool(&config.database).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        e
    })?);

    let project_repository: Arc<dyn IProjectRepository> =
        Arc::new(SqlxProjectRepository::new(pool.clone()));
    let solution_repository: Arc<dyn IEnterpriseSolutionRepository> =
        Arc::new(SqlxEnterpriseSolutionRepository::new(pool.clone()));

    // Initialize the landscape source client and import use cases
    let landscape_client = Arc::new(LandscapeClient::new(&config.landscape).map_err(|e| {
        tracing::error!("Failed to initialize landscape client: {}", e);
        e
    })?);
    let sync_landscape = Arc::new(SyncLandscapeUseCase::new(
        landscape_client.clone(),
        project_repository.clone(),
    ));
    let fetch_landscape = Arc::new(FetchLandscapeUseCase::new(landscape_client));

    // Spawn background sync worker with periodic re-sync and graceful
    // shutdown support
    if config.sync.enabled {
        spawn_sync_worker(sync_landscape.clone(), &config, shutdown_token.clone());
    }

    let state = AppState {
        project_repository,
        solution_repository,
        sync_landscape,
        fetch_landscape,
        config: config_arc.clone(),
        startup_time,
    };

    let router = create_router(state, config_arc);

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
