use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn workspace_data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(file)
}

#[test]
fn eclipse_tour_emits_one_row_per_running_frame() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("frames/solar.csv");

    Command::cargo_bin("eclipse_tour")
        .expect("eclipse_tour bin")
        .args(["--kind", "solar", "--dt", "1", "--output"])
        .arg(&csv_path)
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv reader");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    // Step 60 completes the tour and yields no frame.
    assert_eq!(rows.len(), 59);

    let phases: Vec<usize> = rows.iter().map(|r| r[2].parse().unwrap()).collect();
    assert!(phases.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(phases.first(), Some(&0));
    assert_eq!(phases.last(), Some(&4));

    // Totality rows show the corona at full strength.
    let totality: Vec<f64> = rows
        .iter()
        .filter(|r| &r[2] == "3")
        .map(|r| r[11].parse().unwrap())
        .collect();
    assert_eq!(totality.len(), 12);
    assert!(totality.iter().all(|o| (*o - 0.85).abs() < 1e-9));
}

#[test]
fn eclipse_tour_rejects_non_positive_step() {
    Command::cargo_bin("eclipse_tour")
        .expect("eclipse_tour bin")
        .args(["--dt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dt"));
}

#[test]
fn eclipse_tour_rejects_zero_phase_length() {
    Command::cargo_bin("eclipse_tour")
        .expect("eclipse_tour bin")
        .args(["--phase-seconds", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phase duration must be a positive"));
}

#[test]
fn orbit_positions_reports_skipped_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("bodies.yaml");
    let mut file = File::create(&catalog).expect("catalog");
    writeln!(
        file,
        "- name: Unit\n  orb: {{ a: \"1\", e: \"0\", i: \"0\", om: \"0\", w: \"0\", ma: \"0\" }}\n- name: Broken\n  orb: {{ a: \"x\", e: \"0\", i: \"0\", om: \"0\", w: \"0\", ma: \"0\" }}"
    )
    .unwrap();

    let output = Command::cargo_bin("orbit_positions")
        .expect("orbit_positions bin")
        .args(["--au", "--catalog"])
        .arg(&catalog)
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["unit"], "au");
    assert_eq!(value["skipped"], 1);
    assert_eq!(value["bodies"][0]["name"], "Unit");
    assert_eq!(value["bodies"][0]["x"], 1.0);
}

#[test]
fn orbit_positions_solves_bundled_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("positions.json");

    Command::cargo_bin("orbit_positions")
        .expect("orbit_positions bin")
        .arg("--catalog")
        .arg(workspace_data("small_bodies.yaml"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    assert_eq!(value["unit"], "scene");
    let bodies = value["bodies"].as_array().expect("bodies");
    assert!(bodies.iter().any(|b| b["name"] == "Ceres"));
    assert!(bodies.iter().all(|b| b["radius"].as_f64().unwrap() > 0.0));
}
