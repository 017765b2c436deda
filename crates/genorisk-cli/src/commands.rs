use std::path::Path;

use genorisk_core::models::catalog::CatalogSummary;
use genorisk_core::models::score::TraitScoreResult;
use genorisk_engine::config::EngineConfig;
use genorisk_engine::engine::{HealthReport, RiskEngine};

use crate::input::{load_catalog, load_observations};

fn engine(config: EngineConfig, catalog_path: &Path) -> eyre::Result<RiskEngine> {
    let engine = RiskEngine::new(config);
    engine.load_catalog(load_catalog(catalog_path)?)?;
    Ok(engine)
}

pub fn catalog_summary(catalog_path: &Path) -> eyre::Result<CatalogSummary> {
    Ok(load_catalog(catalog_path)?.summary())
}

pub fn score(
    config: EngineConfig,
    catalog_path: &Path,
    observations_path: &Path,
    trait_id: &str,
) -> eyre::Result<TraitScoreResult> {
    let engine = engine(config, catalog_path)?;
    let observations = load_observations(observations_path)?;
    Ok(engine.score(&observations, trait_id)?)
}

/// Score every trait in the configured domains and fold them into a health score.
pub fn report(
    config: EngineConfig,
    catalog_path: &Path,
    observations_path: &Path,
) -> eyre::Result<HealthReport> {
    let engine = engine(config, catalog_path)?;
    let observations = load_observations(observations_path)?;
    Ok(engine.health_report(&observations, &engine.config().domains)?)
}
