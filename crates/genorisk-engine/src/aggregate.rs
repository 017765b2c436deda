use std::collections::{BTreeMap, BTreeSet};

use genorisk_core::models::health::HealthScore;
use genorisk_core::models::score::TraitScoreResult;

/// Fold trait results into per-domain health scores.
///
/// A domain's score is the mean of `100 - percentile` over its member
/// traits that have a result backed by at least one contributing variant.
/// Domains with no such trait are left out rather than reported as healthy.
pub fn aggregate(
    trait_results: &BTreeMap<String, TraitScoreResult>,
    domain_membership: &BTreeMap<String, BTreeSet<String>>,
) -> HealthScore {
    let components: BTreeMap<String, f64> = domain_membership
        .iter()
        .filter_map(|(domain, members)| {
            let scores: Vec<f64> = members
                .iter()
                .filter_map(|trait_id| trait_results.get(trait_id))
                .filter(|result| result.has_evidence())
                .map(|result| 100.0 - result.percentile.clamp(0.0, 100.0))
                .collect();
            mean(&scores).map(|score| (domain.clone(), score))
        })
        .collect();

    let domain_scores: Vec<f64> = components.values().copied().collect();
    HealthScore {
        overall: mean(&domain_scores),
        components,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
