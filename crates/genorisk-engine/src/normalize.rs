use serde::{Deserialize, Serialize};

/// Percentile points per standard deviation in the linear approximation.
const PERCENTILE_PER_SD: f64 = 15.0;

/// Population distribution of raw scores for one trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl ReferenceDistribution {
    /// Used for traits without published population statistics.
    pub const DEFAULT: ReferenceDistribution = ReferenceDistribution {
        mean: 0.5,
        std_dev: 0.2,
    };

    /// Returns a reason when the distribution cannot be used for scoring.
    pub fn invalid_reason(&self) -> Option<String> {
        if !self.mean.is_finite() {
            return Some(format!("mean {} is not finite", self.mean));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Some(format!("standard deviation {} must be positive", self.std_dev));
        }
        None
    }

    pub fn z_score(&self, raw_score: f64) -> f64 {
        (raw_score - self.mean) / self.std_dev
    }
}

impl Default for ReferenceDistribution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Map a raw score to a percentile in [0, 100].
///
/// Linear in the z-score around the median (`50 + 15z`), clamped. Monotonic
/// and symmetric, which is all the four-bucket categorization needs.
pub fn percentile(raw_score: f64, reference: &ReferenceDistribution) -> f64 {
    let z = reference.z_score(raw_score);
    (50.0 + z * PERCENTILE_PER_SD).clamp(0.0, 100.0)
}
