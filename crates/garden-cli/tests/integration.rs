#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn garden(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("garden-bot").unwrap();
    cmd.current_dir(dir.path())
        .env("GARDEN_ROOT", dir.path())
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("GITHUB_REF_NAME")
        .env_remove("GARDEN_SEED");
    cmd
}

fn lawn(dir: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.path().join("lawn-health.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// ---------------------------------------------------------------------------
// garden-bot tend
// ---------------------------------------------------------------------------

#[test]
fn tend_defaults_to_manual_run() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .args(["tend", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event: manual"))
        .stdout(predicate::str::contains("No seeds in sight"));

    assert!(dir.path().join("lawn-health.json").exists());
    assert!(dir.path().join("garden.svg").exists());
    assert!(dir.path().join("garden.md").exists());
    assert!(!dir.path().join("seedlings").exists());

    let value = lawn(&dir);
    assert_eq!(value["lushnessPercent"], 60);
    assert!(value["lastUpdated"].is_string());
}

#[test]
fn tend_reads_github_environment() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_REF_NAME", "refs/pull/31/merge")
        .arg("tend")
        .assert()
        .success()
        .stdout(predicate::str::contains("Event: pr-opened"))
        .stdout(predicate::str::contains("PR #31"));

    assert!(dir.path().join("seedlings/seed-31.txt").exists());
    let value = lawn(&dir);
    assert_eq!(value["seeds"]["count"], 1);
    assert_eq!(value["seeds"]["sprouting"], 1);
}

#[test]
fn tend_issue_opened_adds_weed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lawn-health.json"),
        r#"{"lawnHealthIndex": 70, "lushnessPercent": 60, "weeds": {"count": 0}}"#,
    )
    .unwrap();

    garden(&dir)
        .args(["tend", "--event", "issue-opened", "--ref-name", "main", "--seed", "7"])
        .assert()
        .success();

    let value = lawn(&dir);
    assert_eq!(value["weeds"]["count"], 1);
    let lush = value["lushnessPercent"].as_u64().unwrap();
    let index = value["lawnHealthIndex"].as_u64().unwrap();
    assert!((55..=59).contains(&lush));
    assert!((66..=69).contains(&index));
    assert!(dir.path().join("weeds/weed-x.txt").exists());
}

#[test]
fn tend_same_seed_same_garden() {
    let run = || {
        let dir = TempDir::new().unwrap();
        garden(&dir)
            .args(["tend", "--event", "pr-closed", "--seed", "42", "--dry-run", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let a: serde_json::Value = serde_json::from_slice(&run()).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&run()).unwrap();
    assert_eq!(a["health"]["lawnHealthIndex"], b["health"]["lawnHealthIndex"]);
    assert_eq!(a["outcome"], b["outcome"]);
    assert_eq!(a["story"], b["story"]);
}

#[test]
fn tend_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .args(["tend", "--event", "issues", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn tend_malformed_state_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("lawn-health.json"), "{ broken").unwrap();
    garden(&dir)
        .arg("tend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// garden-bot render / show
// ---------------------------------------------------------------------------

#[test]
fn render_draws_night_sky_without_touching_state() {
    let dir = TempDir::new().unwrap();
    let state = r#"{"lawnHealthIndex": 33, "seeds": {"count": 2}}"#;
    std::fs::write(dir.path().join("lawn-health.json"), state).unwrap();

    garden(&dir)
        .args(["render", "--hour", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("garden.svg"))
        .stdout(predicate::str::contains("Lawn Health Index 33/100"));

    let svg = std::fs::read_to_string(dir.path().join("garden.svg")).unwrap();
    assert!(svg.contains("class='moon'"));
    assert_eq!(svg.matches("class='flower'").count(), 2);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("lawn-health.json")).unwrap(),
        state
    );
}

#[test]
fn render_rejects_bad_hour() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .args(["render", "--hour", "24"])
        .assert()
        .failure();
}

#[test]
fn render_is_deterministic() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("lawn-health.json"), r#"{"lawnHealthIndex": 81}"#).unwrap();
    let draw = || {
        garden(&dir)
            .args(["render", "--hour", "12", "--dry-run"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(draw(), draw());
}

#[test]
fn show_prints_story() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lawn-health.json"),
        r#"{"seeds": {"count": 1}, "weeds": {"count": 9}}"#,
    )
    .unwrap();
    garden(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeds: 1, Weeds: 9."))
        .stdout(predicate::str::contains("overgrown"))
        .stdout(predicate::str::contains("Updated:   never"));
}

#[test]
fn show_json_on_fresh_garden() {
    let dir = TempDir::new().unwrap();
    let output = garden(&dir).args(["show", "--json"]).assert().success();
    let value: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(value["health"]["lawnHealthIndex"], 70);
    assert!(value["story"]["lines"].is_array());
}

// ---------------------------------------------------------------------------
// garden-bot haiku / config
// ---------------------------------------------------------------------------

#[test]
fn haiku_prints_a_boxed_poem() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .args(["haiku", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant Haiku"))
        .stdout(predicate::str::contains("water your code"));
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    garden(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_catches_collisions() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("garden.yaml"), "svg_file: garden.md\n").unwrap();
    garden(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn config_paths_redirect_outputs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("garden.yaml"),
        "svg_file: docs/garden.svg\nmarkdown_file: docs/README.md\ntitle: Backyard\n",
    )
    .unwrap();
    garden(&dir).args(["tend", "--seed", "5"]).assert().success();

    let md = std::fs::read_to_string(dir.path().join("docs/README.md")).unwrap();
    assert!(md.starts_with("# Backyard\n"));
    assert!(md.contains("![Garden Status](garden.svg)"));
    assert!(dir.path().join("docs/garden.svg").exists());
}
