//! Enterprise credit-health rating: the published band scale, gauge geometry,
//! cluster profiles, and the service facade the dashboard consumes.

pub mod assessment;
pub mod clusters;
pub mod domain;
pub mod gauge;
pub mod palette;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessment::HealthAssessment;
pub use clusters::{cluster_profile, UNDETERMINED_PROFILE};
pub use domain::{
    ClusterId, CreditScore, EnterpriseSnapshot, RatingBand, RatingError, RatioKind,
};
pub use gauge::visual_position;
pub use palette::{band_color, resolve_color, FALLBACK_COLOR};
pub use report::{EnterpriseHealthView, GaugeSegmentView, HealthGaugeView};
pub use repository::{RepositoryError, SnapshotRepository};
pub use router::health_router;
pub use service::{EnterpriseHealthService, HealthServiceError};
