use genorisk_core::models::score::ScoringWarning;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog record '{variant_id}': {reason}")]
    MalformedRecord { variant_id: String, reason: String },

    #[error("duplicate variant id in catalog: {0}")]
    DuplicateVariant(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid reference distribution for '{trait_id}': {reason}")]
    InvalidDistribution { trait_id: String, reason: String },

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("variant catalog has not been loaded")]
    CatalogNotLoaded,

    #[error("variant catalog is already loaded")]
    CatalogAlreadyLoaded,

    #[error("invalid trait identifier: {0:?}")]
    InvalidTrait(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A problem with a single observation. Recovered by dropping the
/// observation and recording a [`ScoringWarning`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("variant '{variant_id}' is not in the catalog")]
    UnknownVariant { variant_id: String },

    #[error("genotype {genotype:?} does not match the alleles of '{variant_id}'")]
    InvalidGenotype { variant_id: String, genotype: String },
}

impl From<ObservationError> for ScoringWarning {
    fn from(e: ObservationError) -> Self {
        match e {
            ObservationError::UnknownVariant { variant_id } => {
                ScoringWarning::UnknownVariant { variant_id }
            }
            ObservationError::InvalidGenotype {
                variant_id,
                genotype,
            } => ScoringWarning::InvalidGenotype {
                variant_id,
                genotype,
            },
        }
    }
}
