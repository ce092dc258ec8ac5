//! End-to-end tests driving the `ecostep` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COMMUTER: &str = r#"{
    "transportMode": "car",
    "distancePerDay": 30,
    "electricityUsage": 10,
    "gasUsage": 5,
    "usesRenewable": false,
    "diet": "omnivore",
    "clothesPerMonth": 2,
    "electronicsPerYear": 1
}"#;

const CYCLIST: &str = r#"{
    "transportMode": "bicycle",
    "distancePerDay": 30,
    "electricityUsage": 10,
    "gasUsage": 5,
    "usesRenewable": false,
    "diet": "omnivore",
    "clothesPerMonth": 2,
    "electronicsPerYear": 1
}"#;

fn ecostep() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecostep"));
    cmd.env_remove("ECOSTEP_FORMAT");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn estimate_prints_json_breakdown() {
    let dir = TempDir::new().unwrap();
    let profile = write(&dir, "profile.json", COMMUTER);

    let output = ecostep()
        .args(["--format", "json", "estimate", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dailyTotal"], 18.1);
    assert_eq!(json["breakdown"]["transportation"], 5.76);
    assert_eq!(json["recommendations"][1]["title"], "Switch to Public Transport");
    assert_eq!(json["recommendations"][1]["potentialSaving"], 2.88);
}

#[test]
fn format_can_come_from_environment() {
    let dir = TempDir::new().unwrap();
    let profile = write(&dir, "profile.json", COMMUTER);

    ecostep()
        .env("ECOSTEP_FORMAT", "json")
        .args(["estimate", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dailyTotal\": 18.1"));
}

#[test]
fn predict_reports_savings() {
    let dir = TempDir::new().unwrap();
    let current = write(&dir, "current.json", COMMUTER);
    let proposed = write(&dir, "proposed.json", CYCLIST);

    ecostep()
        .arg("predict")
        .arg("--current")
        .arg(&current)
        .arg("--proposed")
        .arg(&proposed)
        .assert()
        .success()
        .stdout(predicate::str::contains("saves 5.76 kg (31.8%)"));
}

#[test]
fn annual_projection_counts_trees() {
    ecostep()
        .args(["annual", "--daily", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("313 trees"));
}

#[test]
fn weekly_without_history_is_an_error_result() {
    ecostep()
        .args(["--format", "json", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\": \"No data available\""));
}

#[test]
fn insights_with_sample_history_include_streak() {
    let dir = TempDir::new().unwrap();
    let profile = write(&dir, "profile.json", CYCLIST);

    ecostep()
        .args(["insights", "--sample-history", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Eco Transport Champion"))
        .stdout(predicate::str::contains("Second-Hand First"));
}

#[test]
fn malformed_profile_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let profile = write(&dir, "broken.json", "{ not json");

    ecostep()
        .args(["estimate", "--profile"])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn report_is_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let profile = write(&dir, "profile.json", COMMUTER);
    let history = write(
        &dir,
        "history.csv",
        "date,total_emissions,challenge,carbon_saved\n2026-03-01,12.5,Bike to work,4.2\n",
    );
    let out = dir.path().join("report.md");

    ecostep()
        .args(["report", "--profile"])
        .arg(&profile)
        .arg("--history")
        .arg(&history)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("# Carbon Footprint Report"));
    assert!(report.contains("You emitted 12.5kg CO₂ but saved 4.2kg"));
}

#[test]
fn stats_reports_overview_and_monthly_comparison() {
    let dir = TempDir::new().unwrap();
    let history = write(
        &dir,
        "history.csv",
        "date,total_emissions,challenge,carbon_saved\n\
         2026-03-15,10.0,Bike to work,2.5\n\
         2026-03-14,12.0,,\n",
    );

    let output = ecostep()
        .args(["--format", "json", "stats", "--history"])
        .arg(&history)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let overview = &json["progress"]["overview"];
    assert_eq!(overview["totalDays"], 2);
    assert_eq!(overview["totalChallenges"], 1);
    assert_eq!(overview["totalCarbonSaved"], 2.5);
    assert_eq!(overview["firstActivity"], "2026-03-14");

    let monthly = &json["progress"]["monthlyComparison"];
    assert_eq!(monthly["last30Days"], 22.0);
    assert_eq!(monthly["previous30Days"], 0.0);
    assert_eq!(monthly["change"], 0.0);
    assert_eq!(monthly["improving"], false);
    assert_eq!(json["window"]["period"], "30 days");
}
