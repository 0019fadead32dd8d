//! Case service - Recording and finding cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Case, NewCase, UploadedFile};
use crate::errors::AppResult;
use crate::infra::{UnitOfWork, UploadStore};

/// Case service trait for dependency injection.
#[async_trait]
pub trait CaseService: Send + Sync {
    /// Record a new case, storing its attachment first when one is given.
    ///
    /// If the attachment cannot be stored no case row is written.
    async fn create_case(&self, case: NewCase, file: Option<UploadedFile>) -> AppResult<Case>;

    /// All cases, or only those whose number contains `search`.
    /// An empty search term lists everything.
    async fn list_cases(&self, search: Option<&str>) -> AppResult<Vec<Case>>;
}

/// Concrete implementation of CaseService.
pub struct CaseManager<U: UnitOfWork> {
    uow: Arc<U>,
    uploads: Arc<dyn UploadStore>,
}

impl<U: UnitOfWork> CaseManager<U> {
    pub fn new(uow: Arc<U>, uploads: Arc<dyn UploadStore>) -> Self {
        Self { uow, uploads }
    }
}

#[async_trait]
impl<U: UnitOfWork> CaseService for CaseManager<U> {
    async fn create_case(&self, case: NewCase, file: Option<UploadedFile>) -> AppResult<Case> {
        let document = match file {
            Some(file) => {
                let stored_name = file.stored_name()?;
                self.uploads.save(&stored_name, &file.bytes).await?;
                stored_name
            }
            None => String::new(),
        };

        let case = self.uow.cases().create(case, document).await?;
        tracing::info!(
            case_id = case.id,
            case_number = %case.case_number,
            has_document = case.attachment().is_some(),
            "Case created"
        );

        Ok(case)
    }

    async fn list_cases(&self, search: Option<&str>) -> AppResult<Vec<Case>> {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => self.uow.cases().search_by_number(term).await,
            None => self.uow.cases().list().await,
        }
    }
}
