//! Case repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::case::{self, ActiveModel, Entity as CaseEntity};
use crate::domain::{Case, NewCase};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Case repository trait for dependency injection.
///
/// Listing returns cases in insertion order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Insert a case with the given stored attachment name (empty for none)
    async fn create(&self, case: NewCase, document: String) -> AppResult<Case>;

    /// List all cases
    async fn list(&self) -> AppResult<Vec<Case>>;

    /// Cases whose number contains `term` (`LIKE '%term%'`)
    async fn search_by_number(&self, term: &str) -> AppResult<Vec<Case>>;

    /// Count all cases
    async fn count(&self) -> AppResult<u64>;

    /// Count cases whose status equals `status` exactly
    async fn count_by_status(&self, status: &str) -> AppResult<u64>;
}

/// SeaORM-backed implementation of CaseRepository
pub struct CaseStore {
    db: DatabaseConnection,
}

impl CaseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CaseRepository for CaseStore {
    async fn create(&self, case: NewCase, document: String) -> AppResult<Case> {
        let active_model = ActiveModel {
            case_number: Set(case.case_number),
            client_name: Set(case.client_name),
            case_type: Set(case.case_type),
            hearing_date: Set(case.hearing_date),
            status: Set(case.status),
            document: Set(document),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Case::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Case>> {
        let models = CaseEntity::find()
            .order_by_asc(case::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Case::from).collect())
    }

    async fn search_by_number(&self, term: &str) -> AppResult<Vec<Case>> {
        let models = CaseEntity::find()
            .filter(case::Column::CaseNumber.contains(term))
            .order_by_asc(case::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Case::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        CaseEntity::find()
            .count(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn count_by_status(&self, status: &str) -> AppResult<u64> {
        CaseEntity::find()
            .filter(case::Column::Status.eq(status))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
