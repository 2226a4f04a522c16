//! Integration tests for the thali CLI.
//!
//! These tests run the built binary end to end against the built-in catalog
//! and against catalogs configured through `.thali.yaml`.

use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

mod common;
use common::{run_thali_in_dir, stderr, stdout};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Provides a directory whose config points at a two-record catalog
#[fixture]
fn custom_catalog_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let export = run_thali_in_dir(temp.path(), &["export"]);
    assert!(export.status.success(), "Export failed: {}", stderr(&export));

    let lines: Vec<String> = stdout(&export)
        .lines()
        .filter(|line| {
            line.contains("\"id\":\"haji-biriyani\"") || line.contains("\"id\":\"the-atrium\"")
        })
        .map(str::to_string)
        .collect();
    assert_eq!(lines.len(), 2);

    fs::create_dir(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/restaurants.jsonl"), lines.join("\n")).unwrap();
    fs::write(
        temp.path().join(".thali.yaml"),
        "catalog-file: data/restaurants.jsonl\n",
    )
    .unwrap();
    temp
}

fn json_ids(output: &std::process::Output) -> Vec<String> {
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    value
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[rstest]
fn test_cli_help(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("thali"));
    assert!(out.contains("Usage:"));
}

#[rstest]
fn test_cli_version(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[rstest]
fn test_cli_no_command_prints_hint(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--help"));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[rstest]
fn test_list_all_text(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["list"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Found 16 restaurant(s):"));
    assert!(out.contains("haji-biriyani"));
    assert!(out.contains("the-atrium"));
}

#[rstest]
#[case(&["list", "--price", "$$$$"], &["izumi-gulshan", "the-atrium"])]
#[case(&["list", "--price", "budget", "--area", "mirpur"], &["pizza-burg"])]
#[case(&["list", "--cuisine", "italian"], &["pizza-burg", "spaghetti-jazz"])]
#[case(&["list", "--min-rating", "4.8"], &["bfc-dhanmondi", "haji-biriyani", "kacchi-bhai"])]
#[case(&["list", "--price", "$$$$$"], &[])]
fn test_list_filters_json(
    temp_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &[&str],
) {
    let mut args = args.to_vec();
    args.push("--json");
    let output = run_thali_in_dir(temp_dir.path(), &args);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json_ids(&output), expected);
}

#[rstest]
fn test_list_no_matches_text(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["list", "--area", "chittagong"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No restaurants found.\n");
}

#[rstest]
fn test_list_rejects_bad_rating(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["list", "--min-rating", "great"]);
    assert!(!output.status.success());
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[rstest]
fn test_search_json(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["search", "biryani", "--json"]);

    assert!(output.status.success());
    assert_eq!(
        json_ids(&output),
        [
            "fakruddin-biryani",
            "haji-biriyani",
            "kacchi-bhai",
            "mezban-uttara",
            "star-kabab",
        ]
    );
}

#[rstest]
fn test_search_json_keeps_camel_case_fields(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["search", "izumi", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let izumi = &value[0];
    assert_eq!(izumi["priceRange"], "$$$$");
    assert_eq!(izumi["hoursOfOperation"]["monday"]["closed"], true);
    assert!(izumi["photos"]["exterior"].as_str().unwrap().ends_with("exterior.jpg"));
}

// ============================================================================
// Open Command Tests
// ============================================================================

#[rstest]
fn test_open_at_given_moment_text(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["open", "--day", "mon", "--time", "07:00"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Open on monday 07:00:"));
    assert!(out.contains("Found 3 restaurant(s):"));
    assert!(out.contains("panshi-restaurant"));
    assert!(!out.contains("gloria-jeans"));
}

#[rstest]
fn test_open_monday_afternoon_json(temp_dir: TempDir) {
    let output = run_thali_in_dir(
        temp_dir.path(),
        &["open", "--day", "monday", "--time", "13:00", "--json"],
    );

    assert!(output.status.success());
    let ids = json_ids(&output);
    assert_eq!(ids.len(), 13);
    for closed in ["dhaba-express", "izumi-gulshan", "the-atrium"] {
        assert!(!ids.iter().any(|id| id == closed), "{closed} listed as open");
    }
}

#[rstest]
#[case("Monday")]
#[case("MONDAY")]
#[case("Mon")]
fn test_open_day_ignores_case(temp_dir: TempDir, #[case] day: &str) {
    let output = run_thali_in_dir(
        temp_dir.path(),
        &["open", "--day", day, "--time", "07:00", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        json_ids(&output),
        ["haji-biriyani", "panshi-restaurant", "star-kabab"]
    );
}

#[rstest]
fn test_open_rejects_unknown_day(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["open", "--day", "funday"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid weekday 'funday'"));
}

#[rstest]
fn test_open_rejects_bad_time(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["open", "--time", "1pm"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid time"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[rstest]
fn test_show_details_text(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["show", "the-atrium"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("the-atrium: "));
    assert!(out.contains("Hours:"));
    assert!(out.contains("monday"));
    assert!(out.contains("closed"));
}

#[rstest]
fn test_show_json(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["show", "kacchi-bhai", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "kacchi-bhai");
    assert_eq!(value["location"]["area"], "Mirpur");
}

#[rstest]
fn test_show_unknown_restaurant_fails(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["show", "nowhere"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Restaurant not found: nowhere"));
}

// ============================================================================
// Export and Configuration Tests
// ============================================================================

#[rstest]
fn test_export_writes_one_record_per_line(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["export"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 16);
    for line in out.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["id"].is_string());
    }
}

#[rstest]
fn test_configured_catalog_replaces_builtin(custom_catalog_dir: TempDir) {
    let output = run_thali_in_dir(custom_catalog_dir.path(), &["list", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json_ids(&output), ["haji-biriyani", "the-atrium"]);

    let output = run_thali_in_dir(custom_catalog_dir.path(), &["show", "kacchi-bhai"]);
    assert!(!output.status.success());
}

#[rstest]
fn test_explicit_config_flag(custom_catalog_dir: TempDir) {
    let nested = custom_catalog_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    let output = run_thali_in_dir(
        &nested,
        &["--config", "../.thali.yaml", "search", "buffet", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json_ids(&output), ["the-atrium"]);
}

#[rstest]
fn test_missing_explicit_config_fails(temp_dir: TempDir) {
    let output = run_thali_in_dir(temp_dir.path(), &["--config", "absent.yaml", "list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Config file not found"));
}

#[rstest]
fn test_malformed_catalog_reports_line(temp_dir: TempDir) {
    fs::write(temp_dir.path().join("broken.jsonl"), "{\"id\": 42}\n").unwrap();
    fs::write(
        temp_dir.path().join(".thali.yaml"),
        "catalog-file: broken.jsonl\n",
    )
    .unwrap();

    let output = run_thali_in_dir(temp_dir.path(), &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Malformed restaurant record at line 1"));
}

#[rstest]
fn test_unknown_config_key_fails(temp_dir: TempDir) {
    fs::write(temp_dir.path().join(".thali.yaml"), "catalogue: x.jsonl\n").unwrap();

    let output = run_thali_in_dir(temp_dir.path(), &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains(".thali.yaml"));
}
