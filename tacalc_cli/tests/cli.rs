use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Isolated workspace: empty config file plus a data file path.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tacalc.toml"), "").unwrap();
        Workspace { dir }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("user_inputs.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tacalc").unwrap();
        cmd.env_remove("RUST_LOG")
            .env_remove("TACALC_CONFIG")
            .arg("--config")
            .arg(self.dir.path().join("tacalc.toml"))
            .arg("--data-file")
            .arg(self.data_file());
        cmd
    }

    fn set(&self, key: &str, value: &str) {
        self.cmd().args(["set", key, value]).assert().success();
    }
}

#[test]
fn languages_are_listed() {
    Workspace::new()
        .cmd()
        .arg("languages")
        .assert()
        .success()
        .stdout(contains("en").and(contains("de")).and(contains("fr")).and(contains("lb")))
        .stdout(contains("Lëtzebuergesch"));
}

#[test]
fn inputs_persist_between_runs() {
    let ws = Workspace::new();
    ws.set("initial_investment", "100");

    ws.cmd()
        .args(["get", "initial_investment"])
        .assert()
        .success()
        .stdout("100\n");
    assert!(ws.data_file().exists());
}

#[test]
fn negative_input_is_stored_as_zero() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["set", "total_test_count", "-5"])
        .assert()
        .success()
        .stdout(contains("total_test_count = 0"));
}

#[test]
fn unknown_key_fails() {
    Workspace::new()
        .cmd()
        .args(["set", "coffee_breaks", "3"])
        .assert()
        .failure()
        .stderr(contains("Unknown input key: coffee_breaks"));
}

#[test]
fn unsupported_language_fails() {
    Workspace::new()
        .cmd()
        .args(["--lang", "es", "languages"])
        .assert()
        .failure()
        .stderr(contains("Unsupported language: es"));
}

#[test]
fn savings_in_english_and_german() {
    let ws = Workspace::new();
    ws.set("manual_test_execution_time", "10");
    ws.set("automated_test_execution_time_min", "30");

    ws.cmd()
        .arg("savings")
        .assert()
        .success()
        .stdout(contains("save you about 9.50 hours"));

    ws.cmd()
        .args(["--lang", "de", "savings"])
        .assert()
        .success()
        .stdout(contains("etwa 9,50 Stunden"));
}

#[test]
fn savings_without_inputs_prints_a_hint() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("savings")
        .assert()
        .success()
        .stdout("")
        .stderr(contains("manual_test_execution_time"));

    ws.cmd().args(["--json", "savings"]).assert().success().stdout("null\n");
}

#[test]
fn break_even_as_json() {
    let ws = Workspace::new();
    ws.set("initial_investment", "100");
    ws.set("time_savings_per_run", "12");

    let output = ws.cmd().args(["--json", "break-even"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["break_even"]["kind"], "runs");
    assert_eq!(value["break_even"]["runs"], 9);
    assert_eq!(value["trend"].as_array().unwrap().len(), 20);
}

#[test]
fn break_even_never_without_savings() {
    let ws = Workspace::new();
    ws.set("initial_investment", "100");

    ws.cmd()
        .arg("break-even")
        .assert()
        .success()
        .stdout(contains("never counter-balanced"));
}

#[test]
fn maintenance_verdict() {
    let ws = Workspace::new();
    ws.set("monthly_maintenance_budget", "40");
    ws.set("monthly_maintenance_used", "10");
    ws.set("total_test_count", "50");
    ws.set("new_tests_per_month", "5");

    ws.cmd()
        .arg("maintenance")
        .assert()
        .success()
        .stdout(contains("afford to add and maintain 5 more"))
        .stdout(contains("P = 29.0"));
}

#[test]
fn maintenance_reports_when_headroom_runs_out() {
    let ws = Workspace::new();
    ws.set("monthly_maintenance_budget", "25");
    ws.set("monthly_maintenance_used", "10");
    ws.set("total_test_count", "10");
    ws.set("new_tests_per_month", "5");

    ws.cmd()
        .arg("maintenance")
        .assert()
        .success()
        .stdout(contains("P = 10.0"))
        .stdout(contains("P = 0.0"))
        .stdout(contains("No headroom left from"));
}

#[test]
fn long_break_even_trend_is_complete() {
    let ws = Workspace::new();
    ws.set("initial_investment", "100000");
    ws.set("time_savings_per_run", "1");

    let output = ws.cmd().args(["--json", "break-even"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["break_even"]["runs"], 100_000);
    assert_eq!(value["trend"].as_array().unwrap().len(), 100_011);
}

#[test]
fn config_prints_effective_settings() {
    Workspace::new()
        .cmd()
        .args(["--lang", "fr", "config"])
        .assert()
        .success()
        .stdout(contains("language = \"fr\""))
        .stdout(contains("log_level = \"warn\""));
}

#[test]
fn config_save_persists_language() {
    let ws = Workspace::new();
    ws.cmd().args(["--lang", "de", "config", "--save"]).assert().success();

    let saved = fs::read_to_string(ws.dir.path().join("tacalc.toml")).unwrap();
    assert!(saved.contains("language = \"de\""));

    ws.set("initial_investment", "100");
    ws.cmd()
        .arg("break-even")
        .assert()
        .success()
        .stdout(contains("Investition"));
}

#[test]
fn clear_resets_inputs() {
    let ws = Workspace::new();
    ws.set("new_tests_per_month", "5");
    ws.cmd().arg("clear").assert().success();
    ws.cmd()
        .args(["get", "new_tests_per_month"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn show_lists_every_key() {
    let ws = Workspace::new();
    ws.set("manual_test_execution_time", "2.5");

    let output = ws.cmd().args(["--json", "show"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 9);
    assert_eq!(map["manual_test_execution_time"], 2.5);
    assert_eq!(map["automation_development_time"], 0.0);
}

#[test]
fn chart_writes_svg() {
    let ws = Workspace::new();
    ws.set("manual_test_execution_time", "10");
    ws.set("automated_test_execution_time_min", "30");
    let svg = ws.dir.path().join("q1.svg");

    ws.cmd()
        .args(["chart", "savings", "--output"])
        .arg(&svg)
        .assert()
        .success();

    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.starts_with("<svg"));
}

#[test]
fn chart_without_data_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["chart", "maintenance", "--output"])
        .arg(ws.dir.path().join("q3.svg"))
        .assert()
        .failure()
        .stderr(contains("Not enough input"));
}

#[test]
fn malformed_config_fails() {
    let ws = Workspace::new();
    fs::write(ws.dir.path().join("tacalc.toml"), "language = 42").unwrap();
    ws.cmd().arg("languages").assert().failure().stderr(contains("Serialization error"));
}

#[test]
fn config_language_is_used() {
    let ws = Workspace::new();
    fs::write(ws.dir.path().join("tacalc.toml"), "language = \"fr\"").unwrap();
    ws.set("initial_investment", "100");

    ws.cmd()
        .arg("break-even")
        .assert()
        .success()
        .stdout(contains("Investissement").or(contains("investissement")));
}

#[test]
fn report_writes_pdf() {
    let ws = Workspace::new();
    ws.set("manual_test_execution_time", "10");
    ws.set("automated_test_execution_time_min", "30");
    ws.set("initial_investment", "100");
    ws.set("time_savings_per_run", "12");
    let pdf = ws.dir.path().join("summary.pdf");

    ws.cmd()
        .args(["--lang", "lb", "report", "--output"])
        .arg(&pdf)
        .assert()
        .success();

    let bytes = fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
