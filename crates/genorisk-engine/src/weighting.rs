//! Evidence weighting for a single catalog record.
//!
//! The weight is a product of independent multipliers. None of them is zero,
//! so no single axis can cancel a variant out of the aggregate.

use genorisk_core::models::variant::{
    ClinicalSignificance, EvidenceLevel, FunctionalImpact, VariantRecord,
};

pub fn clinical_multiplier(significance: ClinicalSignificance) -> f64 {
    match significance {
        ClinicalSignificance::Pathogenic => 2.0,
        ClinicalSignificance::LikelyPathogenic => 1.5,
        ClinicalSignificance::UncertainSignificance => 1.0,
        ClinicalSignificance::LikelyBenign => 0.5,
        ClinicalSignificance::Benign => 0.1,
    }
}

pub fn impact_multiplier(impact: FunctionalImpact) -> f64 {
    match impact {
        FunctionalImpact::High => 2.0,
        FunctionalImpact::Moderate => 1.5,
        FunctionalImpact::Low => 1.0,
        FunctionalImpact::Modifier => 0.5,
    }
}

pub fn evidence_multiplier(level: EvidenceLevel) -> f64 {
    match level {
        EvidenceLevel::A => 2.0,
        EvidenceLevel::B => 1.5,
        EvidenceLevel::C => 1.0,
        EvidenceLevel::D => 0.5,
    }
}

/// Bonus for rare variants: below 1% population frequency ×1.5, below 5% ×1.2.
pub fn rarity_multiplier(population_frequency: f64) -> f64 {
    if population_frequency < 0.01 {
        1.5
    } else if population_frequency < 0.05 {
        1.2
    } else {
        1.0
    }
}

/// Contribution weight of a variant. Always strictly positive.
pub fn weight(variant: &VariantRecord) -> f64 {
    clinical_multiplier(variant.clinical_significance)
        * impact_multiplier(variant.functional_impact)
        * evidence_multiplier(variant.evidence_level)
        * rarity_multiplier(variant.population_frequency)
}
