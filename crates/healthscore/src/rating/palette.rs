//! Display colors for the published rating scale.

use super::domain::RatingBand;

/// Neutral brand blue shown when a record carries a label off the published scale.
pub const FALLBACK_COLOR: &str = "#1e3a8a";

/// Hex fill for a band, deep green for AAA down to red for D.
pub const fn band_color(band: RatingBand) -> &'static str {
    match band {
        RatingBand::AAA => "#1B5E20",
        RatingBand::AA => "#43A047",
        RatingBand::A => "#A5D6A7",
        RatingBand::B => "#FFF3B0",
        RatingBand::C => "#FFB74D",
        RatingBand::D => "#E57373",
    }
}

/// Resolves the display color for a raw rating label, case-insensitively.
/// Unknown or blank labels get [`FALLBACK_COLOR`]; the dashboard always has
/// something to paint.
pub fn resolve_color(label: &str) -> &'static str {
    match RatingBand::from_label(label) {
        Some(band) => band_color(band),
        None => FALLBACK_COLOR,
    }
}
