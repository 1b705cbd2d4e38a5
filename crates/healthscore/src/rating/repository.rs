use super::domain::EnterpriseSnapshot;

/// Data-access seam for the snapshot directory, passed into the presentation
/// layer explicitly so the rating core never depends on how records are loaded.
/// Implementations are built once at startup and shared behind an `Arc`.
pub trait SnapshotRepository: Send + Sync {
    /// Every yearly snapshot recorded for one enterprise, in no particular order.
    fn history(&self, code: &str) -> Result<Vec<EnterpriseSnapshot>, RepositoryError>;

    /// Codes of every enterprise the directory knows about.
    fn codes(&self) -> Result<Vec<String>, RepositoryError>;
}

/// Error enumeration for snapshot directory failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("enterprise '{0}' is not in the snapshot directory")]
    UnknownEnterprise(String),
    #[error("snapshot directory unavailable: {0}")]
    Unavailable(String),
}
