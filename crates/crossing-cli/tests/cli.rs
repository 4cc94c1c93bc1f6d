//! End-to-end runs of the CLI entry point.

use std::fs;

use clap::Parser;
use crossing_cli::{run, write_report, Args, CliError};
use crossing_core::CrossingError;
use crossing_solver::CrossingReport;

fn args(dir: &tempfile::TempDir, config: &str, extra: &[&str]) -> Args {
    let config_path = dir.path().join(config);
    let output_path = dir.path().join("solution.json");
    let mut argv = vec![
        "crossing".to_string(),
        "--config".to_string(),
        config_path.display().to_string(),
        "--output".to_string(),
        output_path.display().to_string(),
        "--quiet".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

#[test]
fn defaults_match_file_names() {
    let args = Args::parse_from(["crossing"]);
    assert_eq!(args.config.to_str(), Some("config.json"));
    assert_eq!(args.output.to_str(), Some("solution.json"));
    assert!(!args.pretty);
    assert!(!args.quiet);
}

#[test]
fn solves_json_config_and_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"horse_time_limit": 0, "horse_num_limit": 2, "horse_times": [1, 2, 5, 10]}"#,
    )
    .unwrap();

    let args = args(&dir, "config.json", &[]);
    let report = run(&args).unwrap();
    assert_eq!(report.num_of_solutions, 108);

    let written: CrossingReport =
        serde_json::from_str(&fs::read_to_string(&args.output).unwrap()).unwrap();
    assert_eq!(written, report);
    assert_eq!(written.solutions[0].total_time, 17);
}

#[test]
fn solves_toml_config_with_pretty_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("puzzle.toml"),
        "horse_num_limit = 2\nhorse_times = [3, 4]\n",
    )
    .unwrap();

    let args = args(&dir, "puzzle.toml", &["--pretty"]);
    run(&args).unwrap();

    let text = fs::read_to_string(&args.output).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("\"num_of_solutions\": 1"));
}

#[test]
fn rejects_group_limit_of_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"horse_num_limit": 1, "horse_times": [1, 2]}"#,
    )
    .unwrap();

    let args = args(&dir, "config.json", &[]);
    let err = run(&args).unwrap_err();
    assert!(matches!(err, CliError::Crossing(CrossingError::Config(_))));
    assert!(!args.output.exists());
}

#[test]
fn missing_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let args = args(&dir, "absent.json", &[]);
    assert!(matches!(run(&args).unwrap_err(), CliError::Config(_)));
}

#[test]
fn unwritable_output_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("solution.json");

    let err = write_report(&CrossingReport::default(), &path, false).unwrap_err();
    assert!(err.to_string().contains("missing-dir"));
}
