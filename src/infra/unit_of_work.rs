//! Unit of Work - single access point for all repositories.
//!
//! Every statement runs on its own; no operation in this application needs
//! more than the per-statement atomicity the store provides.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{CaseRepository, CaseStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get case repository
    fn cases(&self) -> Arc<dyn CaseRepository>;
}

/// Concrete implementation of UnitOfWork over one connection pool
pub struct Persistence {
    user_repo: Arc<UserStore>,
    case_repo: Arc<CaseStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            case_repo: Arc::new(CaseStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn cases(&self) -> Arc<dyn CaseRepository> {
        self.case_repo.clone()
    }
}
