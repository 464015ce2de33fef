use std::fs;

use clap::Parser;
use simfasta::config::ExtractorConfig;
use simfasta::error::ExtractError;
use simfasta::tooling::cli::{Cli, CliContext};
use tempfile::TempDir;

use crate::integration::support::{create_simulation, output_names, RecordingConverter};

const TREE: &str = "(leafA:0.5,leafB:0.3);";
const ANCESTOR: &str = "_L_leafA-0_500000leafB-0_300000_R";

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["simfasta"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap()
}

#[test]
fn extracts_only_leaves_by_default() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "leafB", "ancestor1"]);
    let dest = temp.path().join("out");
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    context
        .execute_with_converter(
            &cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]),
            &converter,
        )
        .unwrap();

    assert_eq!(converter.converted_sorted(), vec!["leafA", "leafB"]);
    assert_eq!(output_names(&dest), vec!["leafA.name.fa", "leafB.name.fa"]);
    assert_eq!(
        fs::read_to_string(dest.join("leafB.name.fa")).unwrap(),
        ">leafB.chr1 len=4\nACGT\n>leafB.chr2\nGG\n"
    );
}

#[test]
fn include_ancestors_picks_up_internal_directory() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "leafB", ANCESTOR, "stray"]);
    let dest = temp.path().join("out");
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    context
        .execute_with_converter(
            &cli(&[
                sim.to_str().unwrap(),
                dest.to_str().unwrap(),
                "--include-ancestors",
            ]),
            &converter,
        )
        .unwrap();

    assert_eq!(
        converter.converted_sorted(),
        vec![ANCESTOR.to_string(), "leafA".to_string(), "leafB".to_string()]
    );
}

#[test]
fn all_cycles_ignores_selection() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "ancestor1", "node[3]'s"]);
    let dest = temp.path().join("out");
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    let output = context
        .execute_with_converter(
            &cli(&[
                sim.to_str().unwrap(),
                dest.to_str().unwrap(),
                "--all-cycles",
                "--format",
                "json",
            ]),
            &converter,
        )
        .unwrap();

    assert_eq!(
        output_names(&dest),
        vec!["ancestor1.name.fa", "leafA.name.fa", "node3s.name.fa"]
    );
    let content = fs::read_to_string(dest.join("node3s.name.fa")).unwrap();
    assert!(content.starts_with(">node3s.chr1"));

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["dry_run"], serde_json::Value::Bool(false));
    assert_eq!(parsed["extracted"].as_array().unwrap().len(), 3);
    assert!(parsed["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn existing_destination_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA"]);
    let dest = temp.path().join("out");
    fs::create_dir(&dest).unwrap();
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    let err = context
        .execute_with_converter(
            &cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]),
            &converter,
        )
        .unwrap_err();

    assert!(matches!(err, ExtractError::ConfigError(_)));
    assert!(converter.converted.borrow().is_empty());
}

#[test]
fn missing_metadata_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let sim = temp.path().join("sim");
    fs::create_dir(&sim).unwrap();
    let dest = temp.path().join("out");

    let context = CliContext::with_config(ExtractorConfig::default());
    let err = context
        .execute_with_converter(
            &cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]),
            &RecordingConverter::new(),
        )
        .unwrap_err();

    assert!(matches!(err, ExtractError::ConfigError(_)));
    assert!(!dest.exists());
}

#[test]
fn malformed_tree_aborts_before_output() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), "(leafA,);", &["leafA"]);
    let dest = temp.path().join("out");

    let context = CliContext::with_config(ExtractorConfig::default());
    let err = context
        .execute_with_converter(
            &cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]),
            &RecordingConverter::new(),
        )
        .unwrap_err();

    assert!(matches!(err, ExtractError::TreeError(_)));
    assert!(!dest.exists());
}

#[test]
fn dry_run_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "leafB", "ancestor1"]);
    let dest = temp.path().join("out");
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    let output = context
        .execute_with_converter(
            &cli(&[
                sim.to_str().unwrap(),
                dest.to_str().unwrap(),
                "--dry-run",
                "--format",
                "json",
            ]),
            &converter,
        )
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["dry_run"], serde_json::Value::Bool(true));
    assert_eq!(parsed["extracted"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["skipped"][0], "ancestor1");
    assert!(!dest.exists());
    assert!(converter.converted.borrow().is_empty());
}

#[test]
fn dry_run_with_existing_destination_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "leafB"]);
    let dest = temp.path().join("out");
    fs::create_dir(&dest).unwrap();
    let converter = RecordingConverter::new();

    let context = CliContext::with_config(ExtractorConfig::default());
    let err = context
        .execute_with_converter(
            &cli(&[sim.to_str().unwrap(), dest.to_str().unwrap(), "--dry-run"]),
            &converter,
        )
        .unwrap_err();

    assert!(matches!(err, ExtractError::ConfigError(_)));
    assert!(err.to_string().contains("already exists"));
    assert!(converter.converted.borrow().is_empty());
    assert!(output_names(&dest).is_empty());
}

#[test]
fn list_selection_prints_sorted_names() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &[]);

    let context = CliContext::with_config(ExtractorConfig::default());
    let output = context
        .execute_with_converter(
            &cli(&[
                sim.to_str().unwrap(),
                "--list-selection",
                "--include-ancestors",
            ]),
            &RecordingConverter::new(),
        )
        .unwrap();

    assert_eq!(output, format!("{}\nleafA\nleafB", ANCESTOR));
}

#[cfg(unix)]
#[test]
fn external_converter_runs_without_shell() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), "(\"leaf A\":1,b:1);", &["leaf A", "b"]);
    let script = temp.path().join("fake_cvt");
    fs::write(&script, "#!/bin/sh\nprintf '>rec\\nACGT\\n' > \"$4\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let mut config = ExtractorConfig::default();
    config.converter.program = script.to_string_lossy().into_owned();
    let dest = temp.path().join("out");

    let context = CliContext::with_config(config);
    context
        .execute(&cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]))
        .unwrap();

    assert_eq!(output_names(&dest), vec!["b.name.fa", "leaf A.name.fa"]);
    assert_eq!(
        fs::read_to_string(dest.join("leaf A.name.fa")).unwrap(),
        ">leaf A.rec\nACGT\n"
    );
}

#[cfg(unix)]
#[test]
fn failing_converter_aborts_run() {
    let temp = TempDir::new().unwrap();
    let sim = create_simulation(temp.path(), TREE, &["leafA", "leafB"]);
    let mut config = ExtractorConfig::default();
    config.converter.program = "false".to_string();
    let dest = temp.path().join("out");

    let context = CliContext::with_config(config);
    let err = context
        .execute(&cli(&[sim.to_str().unwrap(), dest.to_str().unwrap()]))
        .unwrap_err();

    assert!(matches!(err, ExtractError::ConverterFailed { .. }));
    assert!(output_names(&dest).is_empty());
}
