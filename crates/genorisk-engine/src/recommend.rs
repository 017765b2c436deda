use genorisk_core::models::score::{MonitoringFrequency, RiskCategory};

const VERY_HIGH_GUIDANCE: &[&str] = &[
    "Schedule regular medical follow-up with a specialist",
    "Make critical lifestyle changes under clinical supervision",
    "Offer genetic counseling for relatives",
];

const HIGH_GUIDANCE: &[&str] = &[
    "Discuss preventive screening with your physician",
    "Adopt preventive lifestyle measures (diet, exercise, sleep)",
    "Review family history for related conditions",
];

const MODERATE_GUIDANCE: &[&str] = &[
    "Follow general health guidelines for diet and physical activity",
    "Mention this result at your next routine check-up",
];

const LOW_GUIDANCE: &[&str] = &[
    "Maintain current healthy habits",
    "Continue routine health screening",
];

/// Cadence is strictly monotonic in the category.
pub fn monitoring_frequency(category: RiskCategory) -> MonitoringFrequency {
    match category {
        RiskCategory::Low => MonitoringFrequency::Annual,
        RiskCategory::Moderate => MonitoringFrequency::Semiannual,
        RiskCategory::High => MonitoringFrequency::Quarterly,
        RiskCategory::VeryHigh => MonitoringFrequency::Monthly,
    }
}

fn guidance(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::VeryHigh => VERY_HIGH_GUIDANCE,
        RiskCategory::High => HIGH_GUIDANCE,
        RiskCategory::Moderate => MODERATE_GUIDANCE,
        RiskCategory::Low => LOW_GUIDANCE,
    }
}

/// Guidance for a scored trait: a one-line summary followed by the
/// category's static guidance tier.
pub fn recommend(
    trait_id: &str,
    category: RiskCategory,
    raw_score: f64,
) -> (Vec<String>, MonitoringFrequency) {
    let mut items = Vec::with_capacity(guidance(category).len() + 1);
    items.push(format!(
        "{}: {} genetic risk (polygenic score {raw_score:.2})",
        display_name(trait_id),
        category_label(category),
    ));
    items.extend(guidance(category).iter().map(|s| s.to_string()));
    (items, monitoring_frequency(category))
}

/// Guidance for a known trait where none of the subject's variants counted.
pub fn baseline_guidance(trait_id: &str) -> Vec<String> {
    vec![
        format!(
            "No known risk variants for {} were found in your data",
            display_name(trait_id)
        ),
        "Continue routine health screening".to_string(),
    ]
}

fn category_label(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => "low",
        RiskCategory::Moderate => "moderate",
        RiskCategory::High => "high",
        RiskCategory::VeryHigh => "very high",
    }
}

/// `type_2_diabetes` -> `Type 2 diabetes`
fn display_name(trait_id: &str) -> String {
    let spaced = trait_id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
