//! Service Container - Centralized service access.
//!
//! Wires repositories, attachment storage and configuration into the
//! services the HTTP layer depends on.

use std::future::Future;
use std::sync::Arc;

use super::{
    AuthService, Authenticator, CaseManager, CaseService, DashboardReporter, DashboardService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Persistence, UploadStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get case service
    fn cases(&self) -> Arc<dyn CaseService>;

    /// Get dashboard service
    fn dashboard(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    case_service: Arc<dyn CaseService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create service container from database connection, upload store and config
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        uploads: Arc<dyn UploadStore>,
        config: Config,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            case_service: Arc::new(CaseManager::new(uow.clone(), uploads)),
            dashboard_service: Arc::new(DashboardReporter::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn cases(&self) -> Arc<dyn CaseService> {
        self.case_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}

/// Concurrent execution of independent operations.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute three independent async operations concurrently.
    ///
    /// Returns the first error if any operation fails.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(
        f1: F1,
        f2: F2,
        f3: F3,
    ) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }
}
