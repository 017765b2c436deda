use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use genorisk_core::models::health::HealthScore;
use genorisk_core::models::score::TraitScoreResult;
use genorisk_core::models::variant::GenotypeObservation;
use serde::Serialize;
use tracing::info;

use crate::aggregate::aggregate;
use crate::catalog::VariantCatalog;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::prs::compute_trait_score;

/// Per-trait results together with the health score folded from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub traits: BTreeMap<String, TraitScoreResult>,
    pub health: HealthScore,
}

/// Scoring entry point for a host application.
///
/// Constructed once by the host and passed to whoever needs it. The catalog
/// is installed exactly once; until then every scoring call fails with
/// [`EngineError::CatalogNotLoaded`].
#[derive(Debug, Default)]
pub struct RiskEngine {
    config: EngineConfig,
    catalog: OnceLock<Arc<VariantCatalog>>,
}

impl RiskEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: OnceLock::new(),
        }
    }

    pub fn with_catalog(config: EngineConfig, catalog: VariantCatalog) -> Self {
        Self {
            config,
            catalog: OnceLock::from(Arc::new(catalog)),
        }
    }

    pub fn load_catalog(&self, catalog: impl Into<Arc<VariantCatalog>>) -> Result<(), EngineError> {
        self.catalog
            .set(catalog.into())
            .map_err(|_| EngineError::CatalogAlreadyLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> Result<&VariantCatalog, EngineError> {
        self.catalog
            .get()
            .map(Arc::as_ref)
            .ok_or(EngineError::CatalogNotLoaded)
    }

    /// Score one trait for a subject.
    pub fn score(
        &self,
        observations: &[GenotypeObservation],
        trait_id: &str,
    ) -> Result<TraitScoreResult, EngineError> {
        let catalog = self.catalog()?;
        if trait_id.trim().is_empty() {
            return Err(EngineError::InvalidTrait(trait_id.to_string()));
        }

        let result = compute_trait_score(catalog, &self.config, observations, trait_id);
        info!(
            trait_id,
            contributing = result.contributing_variant_ids.len(),
            percentile = result.percentile,
            category = %result.risk_category,
            warnings = result.warnings.len(),
            "scored trait"
        );
        Ok(result)
    }

    pub fn aggregate(
        &self,
        trait_results: &BTreeMap<String, TraitScoreResult>,
        domain_membership: &BTreeMap<String, BTreeSet<String>>,
    ) -> HealthScore {
        aggregate(trait_results, domain_membership)
    }

    /// Score every trait named in `domain_membership` and fold the results.
    pub fn health_report(
        &self,
        observations: &[GenotypeObservation],
        domain_membership: &BTreeMap<String, BTreeSet<String>>,
    ) -> Result<HealthReport, EngineError> {
        let trait_ids: BTreeSet<&String> = domain_membership.values().flatten().collect();
        let traits = self.score_all(observations, &trait_ids)?;
        let health = aggregate(&traits, domain_membership);
        info!(
            traits = traits.len(),
            domains = health.components.len(),
            overall = ?health.overall,
            "health report computed"
        );
        Ok(HealthReport { traits, health })
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(
        &self,
        observations: &[GenotypeObservation],
        trait_ids: &BTreeSet<&String>,
    ) -> Result<BTreeMap<String, TraitScoreResult>, EngineError> {
        trait_ids
            .iter()
            .map(|trait_id| {
                self.score(observations, trait_id)
                    .map(|result| ((*trait_id).clone(), result))
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(
        &self,
        observations: &[GenotypeObservation],
        trait_ids: &BTreeSet<&String>,
    ) -> Result<BTreeMap<String, TraitScoreResult>, EngineError> {
        use rayon::prelude::*;

        let trait_ids: Vec<&String> = trait_ids.iter().copied().collect();
        trait_ids
            .par_iter()
            .map(|trait_id| {
                self.score(observations, trait_id)
                    .map(|result| ((*trait_id).clone(), result))
            })
            .collect()
    }
}
