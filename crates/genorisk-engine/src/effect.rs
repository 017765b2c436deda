use genorisk_core::models::variant::{GenotypeObservation, VariantRecord};

use crate::error::ObservationError;

/// Severity score at which the effect is no longer attenuated.
pub const SEVERITY_SATURATION: f64 = 30.0;

/// Additive dosage of the alternate allele: 0.0, 0.5 or 1.0.
///
/// Both observed alleles must be the variant's reference or alternate
/// allele; anything else is rejected.
pub fn dosage(
    observation: &GenotypeObservation,
    variant: &VariantRecord,
) -> Result<f64, ObservationError> {
    let invalid = || ObservationError::InvalidGenotype {
        variant_id: observation.variant_id.clone(),
        genotype: observation.genotype.clone(),
    };

    let (first, second) = observation.alleles().map_err(|_| invalid())?;
    let mut alternate_copies = 0u8;
    for allele in [first, second] {
        if allele == variant.alternate_allele {
            alternate_copies += 1;
        } else if allele != variant.reference_allele {
            return Err(invalid());
        }
    }
    Ok(f64::from(alternate_copies) / 2.0)
}

/// Normalized effect in [0, 1]: dosage, tempered by the variant's
/// severity score when the catalog carries one.
pub fn effect(
    observation: &GenotypeObservation,
    variant: &VariantRecord,
) -> Result<f64, ObservationError> {
    let dosage = dosage(observation, variant)?;
    Ok(match variant.severity_score {
        Some(severity) => dosage * (severity / SEVERITY_SATURATION).clamp(0.0, 1.0),
        None => dosage,
    })
}
