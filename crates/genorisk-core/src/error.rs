use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid allele code: {0:?}")]
    InvalidAllele(char),

    #[error("genotype must have exactly two alleles, got {0:?}")]
    InvalidGenotypeLength(String),
}
