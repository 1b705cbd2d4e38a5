use super::super::assessment::HealthAssessment;
use super::super::domain::{EnterpriseSnapshot, RatingBand, RatioKind};
use super::super::{gauge, palette};
use serde::Serialize;
use std::collections::BTreeMap;

/// One drawn gauge segment. `scale()` yields all six, worst band first.
#[derive(Debug, Clone, Serialize)]
pub struct GaugeSegmentView {
    pub band: RatingBand,
    pub band_label: &'static str,
    pub color: &'static str,
    pub start_pct: f64,
    pub width_pct: f64,
}

impl GaugeSegmentView {
    /// The full drawn scale, left to right.
    pub fn scale() -> Vec<GaugeSegmentView> {
        RatingBand::ordered()
            .into_iter()
            .map(|band| GaugeSegmentView {
                band,
                band_label: band.label(),
                color: palette::band_color(band),
                start_pct: gauge::segment_start_pct(band),
                width_pct: gauge::segment_span_pct(band),
            })
            .collect()
    }
}

/// Pointer-and-bar state for one assessed record.
#[derive(Debug, Clone, Serialize)]
pub struct HealthGaugeView {
    pub score: u8,
    pub rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_band: Option<RatingBand>,
    pub rating_color: &'static str,
    pub pointer_pct: f64,
    pub cluster_profile: &'static str,
    pub segments: Vec<GaugeSegmentView>,
}

impl HealthGaugeView {
    pub fn new(assessment: &HealthAssessment) -> Self {
        Self {
            score: assessment.score.points(),
            rating: assessment.rating_label.clone(),
            rating_band: assessment.rating_band,
            rating_color: assessment.rating_color,
            pointer_pct: assessment.visual_position_pct,
            cluster_profile: assessment.cluster_profile,
            segments: GaugeSegmentView::scale(),
        }
    }
}

/// Full per-enterprise payload served to the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseHealthView {
    pub code: String,
    pub name: String,
    pub year: i32,
    pub gauge: HealthGaugeView,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ratios: BTreeMap<RatioKind, f64>,
}

impl EnterpriseHealthView {
    pub fn new(snapshot: &EnterpriseSnapshot, assessment: &HealthAssessment) -> Self {
        Self {
            code: snapshot.code.clone(),
            name: snapshot.name.clone(),
            year: snapshot.year,
            gauge: HealthGaugeView::new(assessment),
            ratios: snapshot.ratios.clone(),
        }
    }
}
