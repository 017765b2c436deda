use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordered risk buckets derived from a population percentile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Low,
        RiskCategory::Moderate,
        RiskCategory::High,
        RiskCategory::VeryHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
            RiskCategory::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a trait should be re-checked with a clinician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MonitoringFrequency {
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl MonitoringFrequency {
    /// Approximate interval between check-ups.
    pub fn interval_months(self) -> u32 {
        match self {
            MonitoringFrequency::Monthly => 1,
            MonitoringFrequency::Quarterly => 3,
            MonitoringFrequency::Semiannual => 6,
            MonitoringFrequency::Annual => 12,
        }
    }
}

/// Closed interval around a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ScoreInterval {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// A per-observation problem that was recovered from by dropping the
/// observation. Surfaced alongside the result instead of failing the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringWarning {
    UnknownVariant { variant_id: String },
    InvalidGenotype { variant_id: String, genotype: String },
    DuplicateObservation { variant_id: String },
}

impl ScoringWarning {
    pub fn variant_id(&self) -> &str {
        match self {
            ScoringWarning::UnknownVariant { variant_id }
            | ScoringWarning::InvalidGenotype { variant_id, .. }
            | ScoringWarning::DuplicateObservation { variant_id } => variant_id,
        }
    }
}

/// Computed risk for one trait. Created fresh per scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraitScoreResult {
    #[serde(rename = "trait")]
    pub trait_id: String,
    pub raw_score: f64,
    /// Population percentile in [0, 100].
    pub percentile: f64,
    pub risk_category: RiskCategory,
    /// In [0, 0.95], grows with the number of contributing variants.
    pub confidence: f64,
    pub confidence_interval: ScoreInterval,
    /// Sorted by variant id.
    pub contributing_variant_ids: Vec<String>,
    pub recommendations: Vec<String>,
    pub monitoring_frequency: MonitoringFrequency,
    /// Set when the trait is unknown to the catalog or no variant contributed.
    pub low_confidence: bool,
    #[serde(default)]
    pub warnings: Vec<ScoringWarning>,
}

impl TraitScoreResult {
    /// Whether at least one observed variant fed into the score.
    pub fn has_evidence(&self) -> bool {
        !self.contributing_variant_ids.is_empty()
    }
}
