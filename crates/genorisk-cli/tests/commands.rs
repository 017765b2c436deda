use std::io::Write;
use std::process::Command;

use genorisk_cli::commands;
use genorisk_cli::input::{load_config, load_observations};
use genorisk_core::models::score::RiskCategory;
use genorisk_engine::config::{CONFIG_ENV, EngineConfig};
use tempfile::NamedTempFile;

const CATALOG: &str = r#"{
    "version": "test-1",
    "released": "2025-01-15",
    "variants": [
        {
            "id": "rs429358",
            "chromosome": "19",
            "position": 44908684,
            "reference_allele": "T",
            "alternate_allele": "C",
            "gene": "APOE",
            "clinical_significance": "pathogenic",
            "functional_impact": "high",
            "evidence_level": "A",
            "population_frequency": 0.005,
            "disease_associations": ["alzheimer_disease", "cardiovascular_disease"]
        },
        {
            "id": "rs7903146",
            "chromosome": "10",
            "position": 112998590,
            "reference_allele": "C",
            "alternate_allele": "T",
            "gene": "TCF7L2",
            "clinical_significance": "likely_pathogenic",
            "functional_impact": "modifier",
            "evidence_level": "A",
            "population_frequency": 0.3,
            "disease_associations": ["type_2_diabetes"]
        }
    ]
}"#;

const OBSERVATIONS: &str = r#"[
    { "variant_id": "rs429358", "genotype": "CC" },
    { "variant_id": "rs7903146", "genotype": "CT" },
    { "variant_id": "rs0000001", "genotype": "AG" }
]"#;

fn temp_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn catalog_summary_reads_document() {
    let catalog = temp_json(CATALOG);
    let summary = commands::catalog_summary(catalog.path()).unwrap();

    assert_eq!(summary.version, "test-1");
    assert_eq!(summary.total_variants, 2);
    assert_eq!(summary.trait_count, 3);
    assert_eq!(summary.pathogenic_variants, 2);
    assert_eq!(summary.high_impact_variants, 1);
}

#[test]
fn malformed_catalog_is_an_error() {
    let catalog = temp_json(&CATALOG.replace(
        "\"population_frequency\": 0.3",
        "\"population_frequency\": 1.3",
    ));
    assert!(commands::catalog_summary(catalog.path()).is_err());
}

#[test]
fn score_command_reports_unknown_variants_as_warnings() {
    let catalog = temp_json(CATALOG);
    let observations = temp_json(OBSERVATIONS);

    let result = commands::score(
        EngineConfig::default(),
        catalog.path(),
        observations.path(),
        "alzheimer_disease",
    )
    .unwrap();

    assert_eq!(result.risk_category, RiskCategory::VeryHigh);
    assert_eq!(result.contributing_variant_ids, vec!["rs429358"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].variant_id(), "rs0000001");
}

#[test]
fn report_command_aggregates_configured_domains() {
    let catalog = temp_json(CATALOG);
    let observations = temp_json(OBSERVATIONS);

    let report = commands::report(EngineConfig::default(), catalog.path(), observations.path())
        .unwrap();

    assert!(report.health.domain("neurological").is_some());
    assert!(report.health.domain("metabolic").is_some());
    assert!(report.health.domain("pharmacogenomic").is_none());
    assert!(report.health.overall.is_some());
}

#[test]
fn missing_files_are_errors() {
    let missing = std::path::Path::new("/nonexistent/genorisk/catalog.json");
    assert!(commands::catalog_summary(missing).is_err());
    assert!(load_observations(missing).is_err());
    assert!(load_config(Some(missing)).is_err());
}

#[test]
fn no_config_path_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), EngineConfig::default());
}

#[test]
fn broken_config_only_blocks_commands_that_use_it() {
    let catalog = temp_json(CATALOG);
    let observations = temp_json(OBSERVATIONS);
    let broken = temp_json("{ not json");
    let genorisk = || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_genorisk"));
        cmd.env(CONFIG_ENV, broken.path());
        cmd
    };

    let summary = genorisk()
        .arg("catalog")
        .arg("--catalog")
        .arg(catalog.path())
        .output()
        .unwrap();
    assert!(summary.status.success());
    let json: serde_json::Value = serde_json::from_slice(&summary.stdout).unwrap();
    assert_eq!(json["total_variants"], 2);

    let report = genorisk()
        .arg("report")
        .arg("--catalog")
        .arg(catalog.path())
        .arg("--observations")
        .arg(observations.path())
        .output()
        .unwrap();
    assert!(!report.status.success());
}
