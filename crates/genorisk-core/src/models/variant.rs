use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single nucleotide allele code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Allele {
    A,
    C,
    G,
    T,
}

impl Allele {
    pub fn as_char(self) -> char {
        match self {
            Allele::A => 'A',
            Allele::C => 'C',
            Allele::G => 'G',
            Allele::T => 'T',
        }
    }
}

impl TryFrom<char> for Allele {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Allele::A),
            'C' => Ok(Allele::C),
            'G' => Ok(Allele::G),
            'T' => Ok(Allele::T),
            _ => Err(CoreError::InvalidAllele(c)),
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// ClinVar-style clinical significance of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClinicalSignificance {
    Pathogenic,
    LikelyPathogenic,
    UncertainSignificance,
    LikelyBenign,
    Benign,
}

impl ClinicalSignificance {
    /// Strongest first.
    pub const ALL: [ClinicalSignificance; 5] = [
        ClinicalSignificance::Pathogenic,
        ClinicalSignificance::LikelyPathogenic,
        ClinicalSignificance::UncertainSignificance,
        ClinicalSignificance::LikelyBenign,
        ClinicalSignificance::Benign,
    ];

    pub fn is_pathogenic(self) -> bool {
        matches!(
            self,
            ClinicalSignificance::Pathogenic | ClinicalSignificance::LikelyPathogenic
        )
    }
}

/// Predicted functional consequence of a variant on its gene product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FunctionalImpact {
    High,
    Moderate,
    Low,
    Modifier,
}

impl FunctionalImpact {
    /// Strongest first.
    pub const ALL: [FunctionalImpact; 4] = [
        FunctionalImpact::High,
        FunctionalImpact::Moderate,
        FunctionalImpact::Low,
        FunctionalImpact::Modifier,
    ];
}

/// Grade of the evidence backing a variant-trait association.
/// Ordered strongest (A) to weakest (D).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum EvidenceLevel {
    A,
    B,
    C,
    D,
}

impl EvidenceLevel {
    /// Strongest first.
    pub const ALL: [EvidenceLevel; 4] = [
        EvidenceLevel::A,
        EvidenceLevel::B,
        EvidenceLevel::C,
        EvidenceLevel::D,
    ];
}

/// Reference metadata for one genomic position of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantRecord {
    pub id: String,
    pub chromosome: String,
    pub position: u64,
    pub reference_allele: Allele,
    pub alternate_allele: Allele,
    pub gene: String,
    pub clinical_significance: ClinicalSignificance,
    pub functional_impact: FunctionalImpact,
    pub evidence_level: EvidenceLevel,
    pub population_frequency: f64,
    /// Deleteriousness score (CADD-like scale). Attenuates the genotype
    /// effect when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_score: Option<f64>,
    #[serde(default)]
    pub disease_associations: BTreeSet<String>,
    #[serde(default)]
    pub pathways: BTreeSet<String>,
}

impl VariantRecord {
    pub fn is_associated_with(&self, trait_id: &str) -> bool {
        self.disease_associations.contains(trait_id)
    }
}

/// One subject's observed genotype at a variant locus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenotypeObservation {
    pub variant_id: String,
    /// Two upper-case allele letters, e.g. `"AG"`.
    pub genotype: String,
}

impl GenotypeObservation {
    pub fn new(variant_id: impl Into<String>, genotype: impl Into<String>) -> Self {
        Self {
            variant_id: variant_id.into(),
            genotype: genotype.into(),
        }
    }

    /// Split the genotype string into its two alleles. Only exact
    /// upper-case letters are accepted; padding or lower case is invalid.
    pub fn alleles(&self) -> Result<(Allele, Allele), CoreError> {
        let mut chars = self.genotype.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => {
                Ok((Allele::try_from(first)?, Allele::try_from(second)?))
            }
            _ => Err(CoreError::InvalidGenotypeLength(self.genotype.clone())),
        }
    }
}
