use std::path::Path;

use eyre::WrapErr;
use genorisk_core::models::variant::GenotypeObservation;
use genorisk_engine::catalog::VariantCatalog;
use genorisk_engine::config::EngineConfig;

fn read(path: &Path, what: &str) -> eyre::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {what} at {}: {e}", path.display()))
}

/// Load and validate a catalog document. A catalog with any malformed
/// record is refused as a whole.
pub fn load_catalog(path: &Path) -> eyre::Result<VariantCatalog> {
    let contents = read(path, "catalog")?;
    VariantCatalog::from_json_str(&contents)
        .wrap_err_with(|| format!("invalid catalog {}", path.display()))
}

/// Observations are a JSON array of `{ "variant_id", "genotype" }`.
pub fn load_observations(path: &Path) -> eyre::Result<Vec<GenotypeObservation>> {
    let contents = read(path, "observations")?;
    let observations: Vec<GenotypeObservation> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid observations {}", path.display()))?;
    tracing::info!(count = observations.len(), path = %path.display(), "observations loaded");
    Ok(observations)
}

/// Built-in defaults when no config file is given.
pub fn load_config(path: Option<&Path>) -> eyre::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .wrap_err_with(|| format!("invalid engine config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}
