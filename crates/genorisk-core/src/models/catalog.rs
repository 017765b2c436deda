use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overview of a loaded variant catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogSummary {
    pub version: String,
    pub released: Option<jiff::civil::Date>,
    pub total_variants: usize,
    pub trait_count: usize,
    /// Pathogenic or likely pathogenic.
    pub pathogenic_variants: usize,
    pub high_impact_variants: usize,
}
