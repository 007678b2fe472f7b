//! Integration tests for the full analysis pipeline
//!
//! Writes CSV fixtures to temporary directories and runs them through
//! loading, cleaning, aggregation and anagram grouping.

use clap::Parser;
use dino_analyzer::cli::{args::Args, commands};
use dino_analyzer::{
    AnalysisConfig, AnalysisOutcome, Error, FailureKind, SuffixPolicy, analyze_file,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Dataset in the shape of the original dinosaur CSV
const DINOSAURS_CSV: &str = "name,species,length
Rex,T-Rex,12m
Spike,Stegosaurus,9m
Spike2,Stegosaurus,11m
Toole,Raptor,2m
Loote,,3m
Olote,Raptor,
Dollo Saurus,Hadrosaur,
Sauro Dollus,Hadrosaur,8m
";

fn write_csv(temp_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    path
}

fn outcome_for(path: &std::path::Path, config: &AnalysisConfig) -> AnalysisOutcome {
    AnalysisOutcome::from_result(analyze_file(path, config)).unwrap()
}

#[test]
fn test_end_to_end_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "dinosaurs.csv", DINOSAURS_CSV);

    let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.largest_avg_species, "T-Rex");
    assert_eq!(report.largest_avg_length, 12.0);

    // Loote has no species and must not appear; Olote defaults to 1.0m
    let groups: Vec<Vec<&str>> = report
        .anagram_groups
        .iter()
        .map(|g| g.names.iter().map(String::as_str).collect())
        .collect();
    assert_eq!(
        groups,
        vec![vec!["Toole", "Olote"], vec!["Dollo Saurus", "Sauro Dollus"]]
    );

    let species: Vec<&str> = report
        .species_aggregates
        .iter()
        .map(|a| a.species.as_str())
        .collect();
    assert_eq!(species, vec!["T-Rex", "Stegosaurus", "Raptor", "Hadrosaur"]);

    let raptor = &report.species_aggregates[2];
    assert_eq!(raptor.count, 2);
    assert_eq!(raptor.mean_length, 1.5);
}

#[test]
fn test_default_length_changes_result() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "dinosaurs.csv", DINOSAURS_CSV);

    let config = AnalysisConfig::default().with_default_length(30.0);
    let report = analyze_file(&path, &config).unwrap();

    // Hadrosaur: (30 + 8) / 2 = 19
    assert_eq!(report.largest_avg_species, "Hadrosaur");
    assert_eq!(report.largest_avg_length, 19.0);
}

#[test]
fn test_negative_length_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\nRex,T-Rex,12m\nBad,T-Rex,-5m\n";
    let path = write_csv(&temp_dir, "negative.csv", csv);

    match outcome_for(&path, &AnalysisConfig::default()) {
        AnalysisOutcome::Failure { kind, message } => {
            assert_eq!(kind, FailureKind::ValidationError);
            assert!(message.contains("Negative"));
        }
        other => panic!("Expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_length_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\nRex,T-Rex,twelve\n";
    let path = write_csv(&temp_dir, "text.csv", csv);

    let outcome = outcome_for(&path, &AnalysisConfig::default());
    assert!(matches!(
        outcome,
        AnalysisOutcome::Failure {
            kind: FailureKind::ValidationError,
            ..
        }
    ));
}

#[test]
fn test_zero_length_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\nEgg,Ovum,0m\n";
    let path = write_csv(&temp_dir, "zero.csv", csv);

    let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.largest_avg_length, 0.0);
}

#[test]
fn test_no_species_rows_is_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\nGhost,,3m\nPhantom,,4m\n";
    let path = write_csv(&temp_dir, "ghosts.csv", csv);

    let outcome = outcome_for(&path, &AnalysisConfig::default());
    assert!(matches!(
        outcome,
        AnalysisOutcome::Failure {
            kind: FailureKind::EmptyInputError,
            ..
        }
    ));
}

#[test]
fn test_header_only_is_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "empty.csv", "name,species,length\n");

    let result = analyze_file(&path, &AnalysisConfig::default());
    assert!(matches!(result, Err(Error::EmptyInput { .. })));
}

#[test]
fn test_suffix_policy_affects_inner_markers() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\nOdd,Weird,1m2\n";
    let path = write_csv(&temp_dir, "odd.csv", csv);

    let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.largest_avg_length, 12.0);

    let config = AnalysisConfig::default().with_suffix_policy(SuffixPolicy::TrailingOnly);
    let result = analyze_file(&path, &config);
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_collaborator_errors_are_not_outcomes() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.csv");
    let result = AnalysisOutcome::from_result(analyze_file(&missing, &AnalysisConfig::default()));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));

    let wrong_ext = write_csv(&temp_dir, "dinosaurs.txt", DINOSAURS_CSV);
    let result = analyze_file(&wrong_ext, &AnalysisConfig::default());
    assert!(matches!(result, Err(Error::CsvFormat { .. })));

    let not_csv = write_csv(&temp_dir, "notes.csv", "This is not a dinosaur dataset\n");
    let result = analyze_file(&not_csv, &AnalysisConfig::default());
    assert!(matches!(result, Err(Error::CsvFormat { .. })));
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "dinosaurs.csv", DINOSAURS_CSV);
    let config = AnalysisConfig::default();

    let first = analyze_file(&path, &config).unwrap();
    let second = analyze_file(&path, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_cli_run_returns_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "dinosaurs.csv", DINOSAURS_CSV);

    let args = Args::try_parse_from(["dino-analyzer", path.to_str().unwrap(), "--format", "json"])
        .unwrap();
    let outcome = commands::run(&args).unwrap();
    assert!(outcome.is_success());

    let bad = write_csv(&temp_dir, "bad.csv", "name,species,length\nRex,T-Rex,-1m\n");
    let args = Args::try_parse_from(["dino-analyzer", bad.to_str().unwrap()]).unwrap();
    let outcome = commands::run(&args).unwrap();
    assert!(!outcome.is_success());

    let missing = temp_dir.path().join("missing.csv");
    let args = Args::try_parse_from(["dino-analyzer", missing.to_str().unwrap()]).unwrap();
    assert!(commands::run(&args).is_err());
}

#[test]
fn test_cli_run_rejects_invalid_default_length() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(&temp_dir, "dinosaurs.csv", DINOSAURS_CSV);

    let args = Args::try_parse_from([
        "dino-analyzer",
        path.to_str().unwrap(),
        "--default-length=-1",
    ])
    .unwrap();

    let error = commands::run(&args).unwrap_err();
    assert!(format!("{:#}", error).starts_with("Invalid arguments"));
}

#[test]
fn test_spacing_in_species_and_names_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\n\" Rex\",\"T-Rex \",2m\nRex2,T-Rex,10m\nxeR,T-Rex,4m\n";
    let path = write_csv(&temp_dir, "spaced.csv", csv);

    let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();

    let species: Vec<(&str, usize)> = report
        .species_aggregates
        .iter()
        .map(|a| (a.species.as_str(), a.count))
        .collect();
    assert_eq!(species, vec![("T-Rex ", 1), ("T-Rex", 2)]);
    assert_eq!(report.largest_avg_species, "T-Rex");
    assert_eq!(report.largest_avg_length, 7.0);

    assert_eq!(report.anagram_groups.len(), 1);
    assert_eq!(report.anagram_groups[0].names, vec![" Rex", "xeR"]);
}

#[test]
fn test_quoted_field_with_embedded_newline() {
    let temp_dir = TempDir::new().unwrap();
    let csv = "name,species,length\n\"Rex\nJunior\",T-Rex,12m\nSpike,Stegosaurus,9m\n";
    let path = write_csv(&temp_dir, "multiline.csv", csv);

    let report = analyze_file(&path, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.largest_avg_species, "T-Rex");
    assert_eq!(report.species_aggregates.len(), 2);
}
