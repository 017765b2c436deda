use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health scores folded from several trait results. Higher is healthier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthScore {
    /// Mean of the domain scores. `None` when no domain had any evidence.
    pub overall: Option<f64>,
    /// Domain name to score in [0, 100]. Domains without scored traits are absent.
    pub components: BTreeMap<String, f64>,
}

impl HealthScore {
    pub fn domain(&self, name: &str) -> Option<f64> {
        self.components.get(name).copied()
    }
}
