//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, LocalUploadStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let app_state = build_state(config).await?;
    let addr = app_state.config.server_addr();

    // Build router
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Connect storage, seed the default accounts and assemble the state.
///
/// Shared by the server and the HTTP integration tests.
pub async fn build_state(config: Config) -> AppResult<AppState> {
    // Initialize database
    let db = Arc::new(Database::connect(&config).await?);

    // Attachment directory
    let uploads = LocalUploadStore::new(config.upload_dir.clone());
    uploads.ensure_dir().await?;
    tracing::info!(dir = %uploads.dir().display(), "Upload directory ready");

    let app_state = AppState::from_config(db, Arc::new(uploads), config);
    app_state.auth_service.seed_default_accounts().await?;

    Ok(app_state)
}
