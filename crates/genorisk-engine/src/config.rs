use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::normalize::ReferenceDistribution;

/// Current config version. Bump this when adding fields or changing shape.
pub const CURRENT_VERSION: u32 = 1;

/// Environment variable naming a config file for hosts that want one.
pub const CONFIG_ENV: &str = "GENORISK_CONFIG";

/// Population statistics and trait groupings used by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Per-trait reference distribution of raw scores. Traits not listed
    /// use [`ReferenceDistribution::DEFAULT`].
    #[serde(default)]
    pub reference: BTreeMap<String, ReferenceDistribution>,
    /// Pathways whose variants also count toward a trait.
    #[serde(default)]
    pub trait_pathways: BTreeMap<String, BTreeSet<String>>,
    /// Health domain to member traits.
    #[serde(default = "default_domains")]
    pub domains: BTreeMap<String, BTreeSet<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            reference: BTreeMap::new(),
            trait_pathways: BTreeMap::new(),
            domains: default_domains(),
        }
    }
}

fn default_domains() -> BTreeMap<String, BTreeSet<String>> {
    let domain = |name: &str, traits: &[&str]| {
        (
            name.to_string(),
            traits.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        )
    };
    BTreeMap::from([
        domain(
            "cardiovascular",
            &["cardiovascular_disease", "coronary_artery_disease", "hypertension"],
        ),
        domain("metabolic", &["type_2_diabetes", "obesity", "folate_metabolism"]),
        domain("neurological", &["alzheimer_disease"]),
        domain(
            "pharmacogenomic",
            &["warfarin_sensitivity", "clopidogrel_response"],
        ),
    ])
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        // Check the version on raw JSON so a newer shape is refused before
        // it can be misread as this one.
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(found) = value.get("config_version").and_then(|v| v.as_u64()) {
            check_version(found)?;
        }

        let mut config: EngineConfig = serde_json::from_value(value)?;
        // Missing or 0 = written before the version field; same shape as v1.
        config.config_version = CURRENT_VERSION;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Reject reference distributions that would make percentiles undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (trait_id, distribution) in &self.reference {
            if let Some(reason) = distribution.invalid_reason() {
                return Err(ConfigError::InvalidDistribution {
                    trait_id: trait_id.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    pub fn reference_for(&self, trait_id: &str) -> ReferenceDistribution {
        self.reference
            .get(trait_id)
            .copied()
            .unwrap_or(ReferenceDistribution::DEFAULT)
    }

    pub fn pathways_for(&self, trait_id: &str) -> Option<&BTreeSet<String>> {
        self.trait_pathways.get(trait_id)
    }
}

fn check_version(found: u64) -> Result<(), ConfigError> {
    match u32::try_from(found) {
        Ok(version) if version <= CURRENT_VERSION => Ok(()),
        _ => Err(ConfigError::UnsupportedVersion {
            found,
            supported: CURRENT_VERSION,
        }),
    }
}
