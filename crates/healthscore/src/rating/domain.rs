use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("credit score {value} is outside the published 0-100 scale")]
    ScoreOutOfRange { value: f64 },
    #[error("credit score {value} is not a finite number")]
    ScoreNotFinite { value: f64 },
}

/// Integer credit score on the closed 0-100 scale.
///
/// Snapshots carry the model's continuous output; everything downstream works on
/// the rounded integer, so construction is the one place range checks happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CreditScore(u8);

impl CreditScore {
    pub const MIN: CreditScore = CreditScore(0);
    pub const MAX: CreditScore = CreditScore(100);

    pub fn new(points: u8) -> Result<Self, RatingError> {
        if points > 100 {
            return Err(RatingError::ScoreOutOfRange {
                value: f64::from(points),
            });
        }
        Ok(Self(points))
    }

    /// Rounds a continuous model output half away from zero, then validates.
    /// A value that rounds outside 0-100 means the upstream pipeline is broken,
    /// so it is reported rather than clamped.
    pub fn from_model_output(raw: f64) -> Result<Self, RatingError> {
        if !raw.is_finite() {
            return Err(RatingError::ScoreNotFinite { value: raw });
        }
        let rounded = raw.round();
        if !(0.0..=100.0).contains(&rounded) {
            return Err(RatingError::ScoreOutOfRange { value: raw });
        }
        Ok(Self(rounded as u8))
    }

    pub const fn points(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The published rating scale, declared worst to best so declaration order is
/// the gauge's drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingBand {
    D,
    C,
    B,
    A,
    AA,
    AAA,
}

impl RatingBand {
    pub const fn ordered() -> [Self; 6] {
        [Self::D, Self::C, Self::B, Self::A, Self::AA, Self::AAA]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// 0-based position in the worst-to-best order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowest raw score belonging to the band. The floor itself belongs to the
    /// band below except for D, which owns 0.
    pub const fn score_floor(self) -> u8 {
        match self {
            Self::D => 0,
            Self::C => 35,
            Self::B => 50,
            Self::A => 65,
            Self::AA => 75,
            Self::AAA => 85,
        }
    }

    /// Highest raw score belonging to the band (inclusive).
    pub const fn score_ceiling(self) -> u8 {
        match self {
            Self::D => 35,
            Self::C => 50,
            Self::B => 65,
            Self::A => 75,
            Self::AA => 85,
            Self::AAA => 100,
        }
    }

    /// Band owning a score. Scores on a shared boundary belong to the lower
    /// band: 35 is D, 50 is C, 65 is B, 75 is A, 85 is AA.
    pub const fn for_score(score: CreditScore) -> Self {
        let points = score.points();
        if points <= Self::D.score_ceiling() {
            Self::D
        } else if points <= Self::C.score_ceiling() {
            Self::C
        } else if points <= Self::B.score_ceiling() {
            Self::B
        } else if points <= Self::A.score_ceiling() {
            Self::A
        } else if points <= Self::AA.score_ceiling() {
            Self::AA
        } else {
            Self::AAA
        }
    }

    /// Parses a raw rating label. Matching is case-insensitive and ignores
    /// surrounding whitespace; anything off the published scale is `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AAA" => Some(Self::AAA),
            "AA" => Some(Self::AA),
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Class id assigned by the segmentation model. Small non-negative integer;
/// absent on records predating the clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(pub u32);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Financial ratios the upstream pipeline publishes alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    QuickRatio,
    CurrentRatio,
    ShortTermDebtToEquity,
    ShortTermDebtToAssets,
    TotalDebtToEquity,
    TotalDebtToAssets,
    LongTermDebtToEquity,
    LongTermDebtToAssets,
    ReturnOnAssets,
    AssetTurnover,
    ReceivablesTurnover,
    EquityTurnover,
    RevenueGrowth,
    EbitMargin,
    DividendToOcf,
}

impl RatioKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::QuickRatio => "Quick ratio",
            Self::CurrentRatio => "Current ratio",
            Self::ShortTermDebtToEquity => "Short-term debt / equity",
            Self::ShortTermDebtToAssets => "Short-term debt / total assets",
            Self::TotalDebtToEquity => "Total debt / equity",
            Self::TotalDebtToAssets => "Total debt / total assets",
            Self::LongTermDebtToEquity => "Long-term debt / equity",
            Self::LongTermDebtToAssets => "Long-term debt / total assets",
            Self::ReturnOnAssets => "Return on assets",
            Self::AssetTurnover => "Asset turnover",
            Self::ReceivablesTurnover => "Receivables turnover",
            Self::EquityTurnover => "Equity turnover",
            Self::RevenueGrowth => "Revenue growth",
            Self::EbitMargin => "EBIT margin",
            Self::DividendToOcf => "Dividend / operating cash flow",
        }
    }
}

/// One (enterprise, fiscal year) record as the upstream pipeline publishes it.
/// This crate only reads these; producing them is the loading collaborator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseSnapshot {
    pub code: String,
    pub name: String,
    pub year: i32,
    /// Continuous model output; rounded onto the 0-100 scale on assessment.
    pub credit_score: f64,
    /// Rating label as stored, any casing.
    pub rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ratios: BTreeMap<RatioKind, f64>,
}
