use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color for stable output
fn tempo_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tempo").expect("Failed to find tempo binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn add_berlin_event(db_path: &std::path::Path, title: &str) {
    tempo_cmd(db_path)
        .args([
            "add",
            title,
            "--date",
            "2025-02-07",
            "--time",
            "19:00:00",
            "--zone",
            "Europe/Berlin",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_add_event_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args([
            "add",
            "Team sync",
            "--date",
            "2025-02-07",
            "--time",
            "19:00:00",
            "--zone",
            "Europe/Berlin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created event with ID: 1"))
        .stdout(predicate::str::contains("2025-02-07 19:00:00 Europe/Berlin"))
        .stdout(predicate::str::contains("2025-02-07T18:00:00Z"));
}

#[test]
fn test_cli_add_event_unknown_zone_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args([
            "add",
            "Nowhere",
            "--date",
            "2025-02-07",
            "--time",
            "19:00:00",
            "--zone",
            "Not/AZone",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown time zone identifier"));

    // Nothing was persisted.
    tempo_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn test_cli_add_missing_zone_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args(["add", "Zoneless", "--date", "2025-02-07", "--time", "19:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field 'zone'"));
}

#[test]
fn test_cli_gap_rounds_forward_by_default() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args([
            "add",
            "Spring forward",
            "--date",
            "2025-03-30",
            "--time",
            "02:30:00",
            "--zone",
            "Europe/Berlin",
        ])
        .assert()
        .success()
        // Entered wall-clock value preserved, derived instant rounded.
        .stdout(predicate::str::contains("2025-03-30 02:30:00 Europe/Berlin"))
        .stdout(predicate::str::contains("2025-03-30T01:30:00Z"));
}

#[test]
fn test_cli_gap_rejected_when_asked() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args([
            "add",
            "Skipped",
            "--date",
            "2025-03-30",
            "--time",
            "02:30:00",
            "--zone",
            "Europe/Berlin",
            "--on-gap",
            "reject",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_cli_fold_rejected_when_asked() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args([
            "add",
            "Repeated",
            "--date",
            "2025-10-26",
            "--time",
            "02:30:00",
            "--zone",
            "Europe/Berlin",
            "--on-fold",
            "reject",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("double-mapped"));
}

#[test]
fn test_cli_show_round_trips_entered_time() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    add_berlin_event(&db_path, "Round trip");

    tempo_cmd(&db_path)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Round trip"))
        .stdout(predicate::str::contains("- When: 2025-02-07 19:00:00 Europe/Berlin"));
}

#[test]
fn test_cli_list_and_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    add_berlin_event(&db_path, "Listed");

    tempo_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Listed**"));

    tempo_cmd(&db_path)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"zone\": \"Europe/Berlin\""))
        .stdout(predicate::str::contains("\"civil\": \"2025-02-07T19:00:00\""));
}

#[test]
fn test_cli_update_rederives_instant() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    add_berlin_event(&db_path, "Moving");

    tempo_cmd(&db_path)
        .args(["update", "1", "--date", "2025-07-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-07-07 19:00:00 Europe/Berlin"))
        .stdout(predicate::str::contains("2025-07-07T17:00:00Z"));
}

#[test]
fn test_cli_shift_is_labeled_converted() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    add_berlin_event(&db_path, "Global");

    tempo_cmd(&db_path)
        .args(["shift", "1", "Asia/Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-08 03:00:00 Asia/Tokyo (converted)"));
}

#[test]
fn test_cli_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    add_berlin_event(&db_path, "Doomed");

    tempo_cmd(&db_path)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted event 1"));

    tempo_cmd(&db_path)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event 1 not found"));
}

#[test]
fn test_cli_zone_check() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tempo_cmd(&db_path)
        .args(["zone", "Europe/Berlin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zone 'Europe/Berlin' is valid"));

    tempo_cmd(&db_path)
        .args(["zone", "Not/AZone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown time zone identifier"));
}
