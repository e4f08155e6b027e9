use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_lotto-odds")
}

fn run(args: &[&str]) -> Output {
    run_with_env(args, &[])
}

fn run_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(bin());
    command
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("LOTTO_ODDS_GAMES")
        .env_remove("LOTTO_ODDS_WORKERS");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("binary should run")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lotto-odds-{name}-{stamp}.{extension}"))
}

#[test]
fn no_command_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: lotto-odds"));
}

#[test]
fn odds_command_renders_exact_unit_fraction() {
    let output = run(&["odds", "49/6+bonus", "5", "including-bonus"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("6/13983816 = 1/2330636"), "{stdout}");
}

#[test]
fn odds_command_emits_json() {
    let output = run(&["odds", "lotto-6-49", "4", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("odds should emit json");
    assert_eq!(payload["probability"]["favorable"], 13_545);
    assert_eq!(payload["probability"]["total"], 13_983_816);
    assert_eq!(payload["probability"]["one_in"], 1_032);
    assert_eq!(payload["query"]["bonus_condition"], "none");
}

#[test]
fn odds_command_fails_on_domain_error() {
    let output = run(&["odds", "49/6", "7"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn odds_command_rejects_bad_arguments() {
    assert_eq!(run(&["odds", "49/6"]).status.code(), Some(2));
    assert_eq!(run(&["odds", "49/6", "four"]).status.code(), Some(2));
    assert_eq!(run(&["odds", "49/6", "4", "sometimes"]).status.code(), Some(2));
    assert_eq!(run(&["odds", "keno", "4"]).status.code(), Some(1));
}

#[test]
fn table_command_writes_csv() {
    let output = run(&["table", "lotto-6-49", "--csv"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1 + 13);
    assert_eq!(lines[1], "6,excluding-bonus,1,13983816,1/13983816,13983816");
}

#[test]
fn table_command_reports_at_least_odds() {
    let output = run(&["table", "49/6", "--json", "--at-least", "3"]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("table should emit json");
    assert_eq!(payload["tiers"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["at_least"]["probability"]["favorable"], 260_624);
}

#[test]
fn odds_command_rejects_unreachable_tier() {
    let output = run(&["odds", "7/6+bonus", "5", "excluding-bonus"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot choose 1 items from a set of 0"), "{stderr}");
}

#[test]
fn simulate_command_is_seeded() {
    let first = run(&["simulate", "20/4+bonus", "2000", "7", "--workers", "2"]);
    let second = run(&["simulate", "20/4+bonus", "2000", "7"]);
    assert_eq!(first.status.code(), Some(0));
    let a: serde_json::Value = serde_json::from_slice(&first.stdout).expect("json report");
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).expect("json report");
    let hits: u64 = a["tiers"]
        .as_array()
        .expect("tiers array")
        .iter()
        .filter_map(|tier| tier["hits"].as_u64())
        .sum();
    assert_eq!(hits, 2000);
    assert_eq!(a["tiers"], b["tiers"]);
}

#[test]
fn suggest_command_emits_rows() {
    let output = run(&[
        "suggest",
        "data/sample_history.csv",
        "oz-lotto",
        "--as-of",
        "2025-02-20",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("suggest should emit json");
    let rows = payload.as_array().expect("rows array");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["strategy"], "most-common");
}

#[test]
fn suggest_command_fails_without_rows_in_both_modes() {
    for extra in [None, Some("--json")] {
        let mut args = vec!["suggest", "data/sample_history.csv", "5/0"];
        args.extend(extra);
        let output = run(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(output.stdout.is_empty(), "{args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("no rows could be generated"));
    }
}

#[test]
fn suggest_command_reports_bad_history() {
    let path = unique_temp_path("bad-history", "csv");
    fs::write(&path, "date,n1\nyesterday,4\n").expect("fixture should be written");

    let output = run(&["suggest", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid draw date"));

    let _ = fs::remove_file(path);
}

#[test]
fn patterns_command_lists_top_runs() {
    let output = run(&["patterns", "data/sample_history.csv", "2", "--top", "1"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["count\tnumbers", "3\t17 9"]);
}

#[test]
fn games_command_lists_builtin_and_file_presets() {
    let output = run(&["games"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lotto-6-49\t6 of 49 + bonus"));
    assert!(stdout.contains("uk-lotto\t6 of 59 + bonus"));
}

#[test]
fn games_file_from_env_must_load() {
    let missing = unique_temp_path("missing-games", "yaml");
    let missing = missing.to_string_lossy();
    let output = run_with_env(&["games"], &[("LOTTO_ODDS_GAMES", missing.as_ref())]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: failed to read games file"), "{stderr}");

    let malformed = unique_temp_path("malformed-games", "yaml");
    fs::write(&malformed, "games:\n  - name: [unterminated\n").expect("fixture should be written");
    let malformed_path = malformed.to_string_lossy();
    let output = run_with_env(
        &["odds", "49/6", "3"],
        &[("LOTTO_ODDS_GAMES", malformed_path.as_ref())],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: failed to parse games file"), "{stderr}");

    let _ = fs::remove_file(malformed);
}

#[test]
fn games_file_from_env_adds_presets() {
    let path = unique_temp_path("extra-games", "yaml");
    fs::write(&path, "games:\n  - name: pick-three\n    pool_size: 10\n    draw_size: 3\n")
        .expect("fixture should be written");

    let games_path = path.to_string_lossy();
    let output = run_with_env(&["games"], &[("LOTTO_ODDS_GAMES", games_path.as_ref())]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pick-three\t3 of 10"), "{stdout}");
    assert!(!stdout.contains("uk-lotto"), "{stdout}");

    let _ = fs::remove_file(path);
}

#[test]
fn invalid_worker_count_from_env_falls_back_to_all_cores() {
    let args = ["simulate", "20/4", "500", "3"];
    let baseline = run(&args);
    let output = run_with_env(&args, &[("LOTTO_ODDS_WORKERS", "abc")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("LOTTO_ODDS_WORKERS"));
    let a: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let b: serde_json::Value = serde_json::from_slice(&baseline.stdout).expect("json report");
    assert_eq!(a["tiers"], b["tiers"]);

    let pinned = run_with_env(&args, &[("LOTTO_ODDS_WORKERS", "1")]);
    assert_eq!(pinned.status.code(), Some(0));
    let c: serde_json::Value = serde_json::from_slice(&pinned.stdout).expect("json report");
    assert_eq!(a["tiers"], c["tiers"]);
}
