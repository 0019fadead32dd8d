//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UploadStore};
use crate::services::{AuthService, CaseService, DashboardService, ServiceContainer, Services};

/// Application state shared by all handlers.
///
/// Holds no per-user data; the current login travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Case service
    pub case_service: Arc<dyn CaseService>,
    /// Dashboard service
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database connection
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(
        database: Arc<Database>,
        uploads: Arc<dyn UploadStore>,
        config: Config,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), uploads, config.clone());

        Self {
            auth_service: container.auth(),
            case_service: container.cases(),
            dashboard_service: container.dashboard(),
            database,
            config: Arc::new(config),
        }
    }
}
