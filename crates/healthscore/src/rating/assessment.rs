//! Composition of the rating primitives into one render-ready result.

use super::clusters;
use super::domain::{ClusterId, CreditScore, EnterpriseSnapshot, RatingBand, RatingError};
use super::gauge;
use super::palette;

/// Everything the dashboard needs to present one enterprise's health state.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAssessment {
    pub score: CreditScore,
    /// Rating label normalized to trimmed upper case, kept even when it is not
    /// on the published scale.
    pub rating_label: String,
    /// Band matching the label, when the label is on the published scale.
    pub rating_band: Option<RatingBand>,
    pub rating_color: &'static str,
    pub visual_position_pct: f64,
    pub cluster: Option<ClusterId>,
    pub cluster_profile: &'static str,
}

impl HealthAssessment {
    /// Rates one raw (score, rating, cluster) triple. Only the score path can
    /// fail; label and cluster resolution always produce a displayable value.
    pub fn evaluate(
        raw_score: f64,
        rating: &str,
        cluster: Option<ClusterId>,
    ) -> Result<Self, RatingError> {
        let score = CreditScore::from_model_output(raw_score)?;
        let rating_label = rating.trim().to_ascii_uppercase();
        let rating_band = RatingBand::from_label(&rating_label);

        Ok(Self {
            score,
            rating_color: palette::resolve_color(&rating_label),
            visual_position_pct: gauge::visual_position(score),
            cluster,
            cluster_profile: clusters::cluster_profile(cluster),
            rating_label,
            rating_band,
        })
    }

    pub fn from_snapshot(snapshot: &EnterpriseSnapshot) -> Result<Self, RatingError> {
        Self::evaluate(snapshot.credit_score, &snapshot.rating, snapshot.cluster)
    }
}
