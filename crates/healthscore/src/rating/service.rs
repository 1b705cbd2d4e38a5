use std::sync::Arc;

use super::assessment::HealthAssessment;
use super::domain::RatingError;
use super::report::EnterpriseHealthView;
use super::repository::{RepositoryError, SnapshotRepository};

/// Facade composing the snapshot directory with the rating primitives. Year
/// selection lives here, on the caller side, so the primitives stay pure.
pub struct EnterpriseHealthService<R> {
    repository: Arc<R>,
}

impl<R> EnterpriseHealthService<R>
where
    R: SnapshotRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Assesses the most recent fiscal year on record for one enterprise.
    pub fn latest_health(&self, code: &str) -> Result<EnterpriseHealthView, HealthServiceError> {
        let history = self.repository.history(code)?;
        let latest = history
            .into_iter()
            .max_by_key(|snapshot| snapshot.year)
            .ok_or_else(|| HealthServiceError::EmptyHistory(code.to_string()))?;

        let assessment = HealthAssessment::from_snapshot(&latest)?;
        Ok(EnterpriseHealthView::new(&latest, &assessment))
    }

    /// Sorted roster of enterprise codes for pick lists and demos.
    pub fn roster(&self) -> Result<Vec<String>, HealthServiceError> {
        let mut codes = self.repository.codes()?;
        codes.sort();
        Ok(codes)
    }
}

/// Error raised by the health service.
#[derive(Debug, thiserror::Error)]
pub enum HealthServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error("enterprise '{0}' has no yearly snapshots on record")]
    EmptyHistory(String),
}
