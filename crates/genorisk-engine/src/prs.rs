use std::collections::{BTreeSet, HashSet};

use genorisk_core::models::score::{ScoreInterval, ScoringWarning, TraitScoreResult};
use genorisk_core::models::variant::{GenotypeObservation, VariantRecord};
use tracing::{debug, warn};

use crate::catalog::VariantCatalog;
use crate::categorize::categorize;
use crate::config::EngineConfig;
use crate::effect::effect;
use crate::error::ObservationError;
use crate::normalize::percentile;
use crate::recommend::{baseline_guidance, monitoring_frequency, recommend};
use crate::weighting::weight;

/// Contributing variants needed to reach full confidence (before the cap).
const CONFIDENCE_SATURATION: f64 = 10.0;
const MAX_CONFIDENCE: f64 = 0.95;
/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.96;

/// Whether a record bears on a trait, directly or through a pathway.
pub fn is_relevant(
    variant: &VariantRecord,
    trait_id: &str,
    pathways: Option<&BTreeSet<String>>,
) -> bool {
    variant.is_associated_with(trait_id)
        || pathways.is_some_and(|set| !set.is_disjoint(&variant.pathways))
}

pub fn confidence(contributing: usize) -> f64 {
    (contributing as f64 / CONFIDENCE_SATURATION).min(MAX_CONFIDENCE)
}

/// 95% interval around the raw score, narrowing as total weight grows.
pub fn confidence_interval(raw_score: f64, total_weight: f64) -> ScoreInterval {
    let se = 1.0 / total_weight.max(1.0).sqrt();
    let half_width = Z_95 * se;
    ScoreInterval {
        lower: (raw_score - half_width).max(0.0),
        upper: (raw_score + half_width).min(1.0),
    }
}

struct Contribution<'a> {
    variant: &'a VariantRecord,
    weight: f64,
    effect: f64,
}

/// Score one trait from a subject's observations.
///
/// Unknown variants, genotypes that don't match the variant's alleles and
/// repeated observations of one variant are dropped and reported in
/// `warnings`. Contributions are summed in variant-id order so the result
/// does not depend on the order of `observations`.
pub fn compute_trait_score(
    catalog: &VariantCatalog,
    config: &EngineConfig,
    observations: &[GenotypeObservation],
    trait_id: &str,
) -> TraitScoreResult {
    let pathways = config.pathways_for(trait_id);
    let mut warnings: Vec<ScoringWarning> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut contributions: Vec<Contribution<'_>> = Vec::new();

    for observation in observations {
        let Some(variant) = catalog.lookup(&observation.variant_id) else {
            warn!(variant_id = %observation.variant_id, "dropping observation of unknown variant");
            warnings.push(
                ObservationError::UnknownVariant {
                    variant_id: observation.variant_id.clone(),
                }
                .into(),
            );
            continue;
        };
        if !is_relevant(variant, trait_id, pathways) {
            continue;
        }

        let effect = match effect(observation, variant) {
            Ok(effect) => effect,
            Err(e) => {
                warn!(variant_id = %variant.id, genotype = %observation.genotype, "dropping invalid genotype");
                warnings.push(e.into());
                continue;
            }
        };
        if !seen.insert(variant.id.as_str()) {
            warn!(variant_id = %variant.id, "dropping repeated observation");
            warnings.push(ScoringWarning::DuplicateObservation {
                variant_id: variant.id.clone(),
            });
            continue;
        }

        let weight = weight(variant);
        debug!(variant_id = %variant.id, weight, effect, "variant contribution");
        contributions.push(Contribution {
            variant,
            weight,
            effect,
        });
    }

    contributions.sort_by(|a, b| a.variant.id.cmp(&b.variant.id));

    let (sum_weighted_effect, sum_weight) = contributions
        .iter()
        .fold((0.0_f64, 0.0_f64), |(weighted, total), c| {
            (weighted + c.weight * c.effect, total + c.weight)
        });

    let raw_score = if sum_weight > 0.0 {
        sum_weighted_effect / sum_weight
    } else {
        0.0
    };
    let percentile = percentile(raw_score, &config.reference_for(trait_id));
    let risk_category = categorize(percentile);
    let contributing_variant_ids: Vec<String> = contributions
        .iter()
        .map(|c| c.variant.id.clone())
        .collect();

    let (recommendations, monitoring_frequency, low_confidence) = if !contributions.is_empty() {
        let (items, cadence) = recommend(trait_id, risk_category, raw_score);
        (items, cadence, false)
    } else if catalog.recognizes_trait(trait_id, pathways) {
        (
            baseline_guidance(trait_id),
            monitoring_frequency(risk_category),
            true,
        )
    } else {
        (Vec::new(), monitoring_frequency(risk_category), true)
    };

    TraitScoreResult {
        trait_id: trait_id.to_string(),
        raw_score,
        percentile,
        risk_category,
        confidence: confidence(contributing_variant_ids.len()),
        confidence_interval: confidence_interval(raw_score, sum_weight),
        contributing_variant_ids,
        recommendations,
        monitoring_frequency,
        low_confidence,
        warnings,
    }
}
