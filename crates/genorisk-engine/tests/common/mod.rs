#![allow(dead_code)]

use std::collections::BTreeSet;

use genorisk_core::models::variant::{
    Allele, ClinicalSignificance, EvidenceLevel, FunctionalImpact, GenotypeObservation,
    VariantRecord,
};
use genorisk_engine::catalog::VariantCatalog;

/// A strongly weighted A>G variant associated with the given traits.
pub fn variant(id: &str, traits: &[&str]) -> VariantRecord {
    VariantRecord {
        id: id.to_string(),
        chromosome: "19".to_string(),
        position: 44_908_684,
        reference_allele: Allele::A,
        alternate_allele: Allele::G,
        gene: "APOE".to_string(),
        clinical_significance: ClinicalSignificance::Pathogenic,
        functional_impact: FunctionalImpact::High,
        evidence_level: EvidenceLevel::A,
        population_frequency: 0.005,
        severity_score: None,
        disease_associations: traits.iter().map(|t| t.to_string()).collect(),
        pathways: BTreeSet::new(),
    }
}

pub fn catalog(records: Vec<VariantRecord>) -> VariantCatalog {
    VariantCatalog::from_records(records).expect("synthetic catalog is valid")
}

pub fn obs(variant_id: &str, genotype: &str) -> GenotypeObservation {
    GenotypeObservation::new(variant_id, genotype)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
