//! Gauge geometry for the six-band scale.
//!
//! Raw score bands are unequal (35/15/15/10/10/15 points wide) while the gauge
//! draws six equal segments, so a score's progress through its own band is
//! remapped linearly onto that band's drawn segment.

use super::domain::{CreditScore, RatingBand};

/// Drawn width of one gauge segment, in percent of the full bar. Five segments
/// at 16.66 leave 16.70 for the top band, closing the scale at exactly 100.00.
pub const SEGMENT_WIDTH_PCT: f64 = 16.66;

/// Left edge of a band's segment: 0.00, 16.66, 33.32, 49.98, 66.64, 83.30.
pub fn segment_start_pct(band: RatingBand) -> f64 {
    band.index() as f64 * SEGMENT_WIDTH_PCT
}

/// Right edge of a band's segment. The AAA segment ends at 100.00 rather than
/// 99.96 so the bar has no dead zone on the right.
pub fn segment_end_pct(band: RatingBand) -> f64 {
    match band {
        RatingBand::AAA => 100.0,
        _ => segment_start_pct(band) + SEGMENT_WIDTH_PCT,
    }
}

pub fn segment_span_pct(band: RatingBand) -> f64 {
    segment_end_pct(band) - segment_start_pct(band)
}

/// Percent position of a score on the drawn gauge, measured from the left edge.
///
/// The score's band is found first (boundary scores belong to the lower band),
/// then its linear progress through the band's raw range is projected onto the
/// band's segment. 0 lands on 0.00, 35 on the D/C edge at 16.66, 100 on 100.00,
/// and the mapping is monotone across the whole scale.
pub fn visual_position(score: CreditScore) -> f64 {
    let band = RatingBand::for_score(score);
    let floor = band.score_floor();
    let raw_span = f64::from(band.score_ceiling() - floor);
    let progress = f64::from(score.points() - floor) / raw_span;
    segment_start_pct(band) + progress * segment_span_pct(band)
}
