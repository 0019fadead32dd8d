//! Dashboard service - Live case counts.

use async_trait::async_trait;
use std::sync::Arc;

use super::container::parallel;
use crate::config::{STATUS_CLOSED, STATUS_OPEN};
use crate::domain::DashboardMetrics;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Recompute the dashboard figures from the current table contents
    async fn metrics(&self) -> AppResult<DashboardMetrics>;
}

pub struct DashboardReporter<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DashboardReporter<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardReporter<U> {
    async fn metrics(&self) -> AppResult<DashboardMetrics> {
        let cases = self.uow.cases();

        let (total, open, closed) = parallel::join3(
            cases.count(),
            cases.count_by_status(STATUS_OPEN),
            cases.count_by_status(STATUS_CLOSED),
        )
        .await?;

        Ok(DashboardMetrics::from_counts(total, open, closed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockCaseRepository, MockUserRepository};
    use crate::infra::{CaseRepository, UserRepository};

    struct TestUnitOfWork {
        cases: Arc<MockCaseRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            Arc::new(MockUserRepository::new())
        }

        fn cases(&self) -> Arc<dyn CaseRepository> {
            self.cases.clone()
        }
    }

    fn reporter(total: u64, open: u64, closed: u64) -> DashboardReporter<TestUnitOfWork> {
        let mut repo = MockCaseRepository::new();
        repo.expect_count().returning(move || Ok(total));
        repo.expect_count_by_status()
            .withf(|status| status.to_string() == "Open")
            .returning(move |_| Ok(open));
        repo.expect_count_by_status()
            .withf(|status| status.to_string() == "Closed")
            .returning(move |_| Ok(closed));

        DashboardReporter::new(Arc::new(TestUnitOfWork {
            cases: Arc::new(repo),
        }))
    }

    #[tokio::test]
    async fn test_empty_dashboard() {
        let metrics = reporter(0, 0, 0).metrics().await.unwrap();
        assert_eq!(metrics, DashboardMetrics::from_counts(0, 0, 0));
        assert_eq!(metrics.prediction, 0);
    }

    #[tokio::test]
    async fn test_counts_flow_into_prediction() {
        let metrics = reporter(10, 3, 5).metrics().await.unwrap();
        assert_eq!(metrics.total, 10);
        assert_eq!(metrics.open, 3);
        assert_eq!(metrics.closed, 5);
        assert_eq!(metrics.prediction, 50);
    }
}
