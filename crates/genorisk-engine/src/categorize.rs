use genorisk_core::models::score::RiskCategory;

pub const MODERATE_FROM: f64 = 25.0;
pub const HIGH_FROM: f64 = 50.0;
pub const VERY_HIGH_FROM: f64 = 75.0;

/// Bucket a percentile. Intervals are half-open on the right, so each
/// boundary belongs to the higher category. Values below zero and NaN fall
/// into `Low`, values above 100 into `VeryHigh`.
pub fn categorize(percentile: f64) -> RiskCategory {
    if percentile >= VERY_HIGH_FROM {
        RiskCategory::VeryHigh
    } else if percentile >= HIGH_FROM {
        RiskCategory::High
    } else if percentile >= MODERATE_FROM {
        RiskCategory::Moderate
    } else {
        RiskCategory::Low
    }
}
