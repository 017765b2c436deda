use std::collections::{BTreeMap, BTreeSet, HashMap};

use genorisk_core::models::catalog::CatalogSummary;
use genorisk_core::models::variant::{FunctionalImpact, VariantRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

const UNVERSIONED: &str = "unversioned";

/// On-disk shape of a bundled catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    #[serde(default)]
    pub released: Option<jiff::civil::Date>,
    pub variants: Vec<VariantRecord>,
}

/// Immutable, validated reference data keyed by variant id.
///
/// Records are stored contiguously; the maps hold indices into `records`.
/// Nothing here is mutable after construction, so a catalog can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct VariantCatalog {
    version: String,
    released: Option<jiff::civil::Date>,
    records: Vec<VariantRecord>,
    by_id: HashMap<String, usize>,
    by_trait: BTreeMap<String, Vec<usize>>,
    by_gene: BTreeMap<String, Vec<usize>>,
    by_pathway: BTreeMap<String, Vec<usize>>,
}

impl VariantCatalog {
    /// Build a catalog from already-parsed records. Fails on the first
    /// record that violates an invariant; nothing is partially loaded.
    pub fn from_records(records: Vec<VariantRecord>) -> Result<Self, CatalogError> {
        Self::build(UNVERSIONED.to_string(), None, records)
    }

    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        Self::build(doc.version, doc.released, doc.variants)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    fn build(
        version: String,
        released: Option<jiff::civil::Date>,
        records: Vec<VariantRecord>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_trait: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_gene: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_pathway: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            validate_record(record)?;
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateVariant(record.id.clone()));
            }
            for trait_id in &record.disease_associations {
                by_trait.entry(trait_id.clone()).or_default().push(idx);
            }
            for pathway in &record.pathways {
                by_pathway.entry(pathway.clone()).or_default().push(idx);
            }
            by_gene.entry(record.gene.clone()).or_default().push(idx);
        }

        info!(
            version = %version,
            variants = records.len(),
            traits = by_trait.len(),
            "variant catalog loaded"
        );

        Ok(Self {
            version,
            released,
            records,
            by_id,
            by_trait,
            by_gene,
            by_pathway,
        })
    }

    pub fn lookup(&self, variant_id: &str) -> Option<&VariantRecord> {
        self.by_id.get(variant_id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    /// Records that list `trait_id` directly in their disease associations.
    pub fn variants_for_trait(&self, trait_id: &str) -> Vec<&VariantRecord> {
        self.indexed(&self.by_trait, trait_id)
    }

    pub fn variants_for_gene(&self, gene: &str) -> Vec<&VariantRecord> {
        self.indexed(&self.by_gene, gene)
    }

    /// True when any record references the trait, either directly or
    /// through one of the given pathways.
    pub fn recognizes_trait(&self, trait_id: &str, pathways: Option<&BTreeSet<String>>) -> bool {
        if self.by_trait.contains_key(trait_id) {
            return true;
        }
        pathways.is_some_and(|set| set.iter().any(|p| self.by_pathway.contains_key(p)))
    }

    /// All traits referenced by at least one record, sorted.
    pub fn traits(&self) -> Vec<&str> {
        self.by_trait.keys().map(String::as_str).collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            version: self.version.clone(),
            released: self.released,
            total_variants: self.records.len(),
            trait_count: self.by_trait.len(),
            pathogenic_variants: self
                .records
                .iter()
                .filter(|r| r.clinical_significance.is_pathogenic())
                .count(),
            high_impact_variants: self
                .records
                .iter()
                .filter(|r| r.functional_impact == FunctionalImpact::High)
                .count(),
        }
    }

    fn indexed(&self, index: &BTreeMap<String, Vec<usize>>, key: &str) -> Vec<&VariantRecord> {
        index
            .get(key)
            .map(|ids| ids.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }
}

fn validate_record(record: &VariantRecord) -> Result<(), CatalogError> {
    let malformed = |reason: String| CatalogError::MalformedRecord {
        variant_id: record.id.clone(),
        reason,
    };

    if record.id.trim().is_empty() {
        return Err(malformed("empty variant id".to_string()));
    }
    if record.gene.trim().is_empty() {
        return Err(malformed("empty gene symbol".to_string()));
    }
    if !is_valid_chromosome(&record.chromosome) {
        return Err(malformed(format!("unknown chromosome {:?}", record.chromosome)));
    }
    if record.position == 0 {
        return Err(malformed("position must be positive".to_string()));
    }
    if record.reference_allele == record.alternate_allele {
        return Err(malformed(format!(
            "reference and alternate allele are both {}",
            record.reference_allele
        )));
    }
    let freq = record.population_frequency;
    if !freq.is_finite() || !(0.0..=1.0).contains(&freq) {
        return Err(malformed(format!("population frequency {freq} outside [0, 1]")));
    }
    if let Some(severity) = record.severity_score
        && (!severity.is_finite() || severity < 0.0)
    {
        return Err(malformed(format!("severity score {severity} must be non-negative")));
    }
    Ok(())
}

fn is_valid_chromosome(chromosome: &str) -> bool {
    let name = chromosome.strip_prefix("chr").unwrap_or(chromosome);
    match name {
        "X" | "Y" | "MT" => true,
        _ => name.parse::<u8>().is_ok_and(|n| (1..=22).contains(&n)),
    }
}
