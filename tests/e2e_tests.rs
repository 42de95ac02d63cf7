/*
 * End-to-end tests for the trivia application. Each test gets its own home directory
 * so the real data file is never touched.
 */
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use serde_json::Value;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/questions.json");

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    trivia_cmd(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("trivia stats"));
}

#[test]
fn missing_data_file_exits_with_one() {
    let home = TempDir::new().unwrap();
    trivia_cmd(home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no trivia file found"))
        .stderr(predicate::str::contains("Run /end-day"));
}

#[test]
fn malformed_data_file_is_an_error() {
    let (home, _path) = setup("{ \"questions\": [");
    trivia_cmd(home.path())
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not parse JSON"));
}

#[test]
fn stats_reports_without_saving() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 3 | Attempted: 2 | Accuracy: 60%",
        ))
        .stdout(predicate::str::contains("Code Review Questions:"))
        .stdout(predicate::str::contains(
            "Total: 1 | Attempted: 0 | Accuracy: 0%",
        ))
        .stdout(predicate::str::contains("Streak: 3 | Best: 5"))
        .stdout(predicate::str::contains("Systems: Payments, Billing"));

    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn code_mode_without_code_reviews_finds_nothing() {
    let (home, path) = setup("{\"questions\": []}");
    trivia_cmd(home.path())
        .arg("code")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"questions\": []}");
}

#[test]
fn filter_without_matches_finds_nothing() {
    let (home, _path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .arg("shipping")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found"));
}

#[test]
fn correct_answer_is_saved() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .args(&["biz", "bill"])
        .write_stdin("\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Which accounts are skipped by the monthly invoice run?",
        ))
        .stdout(predicate::str::contains(
            "Accounts flagged as internal or with a zero balance.",
        ))
        .stdout(predicate::str::contains("✓ Nice! Streak: 4"))
        .stdout(predicate::str::contains("Session complete! Streak: 4 | Best: 5"));

    let data = read(&path);
    let question = &data["questions"][1];
    assert_eq!(question["times_asked"], 5);
    assert_eq!(question["times_correct"], 3);
    assert_eq!(data["questions"][0]["times_asked"], 0);
    assert_eq!(data["stats"]["current_streak"], 4);
    assert_eq!(data["stats"]["best_streak"], 5);
    assert_is_date(&data["stats"]["last_played"]);
}

#[test]
fn wrong_answer_resets_streak() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .arg("Security")
        .write_stdin("\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CODE REVIEW"))
        .stdout(predicate::str::contains("From: dana on #420"))
        .stdout(predicate::str::contains("You'll get it next time"))
        .stdout(predicate::str::contains("Session complete! Streak: 0 | Best: 5"));

    let data = read(&path);
    let review = &data["code_reviews"][0];
    assert_eq!(review["times_asked"], 1);
    assert_eq!(review["times_correct"], 0);
    assert_eq!(data["stats"]["current_streak"], 0);
    assert_eq!(data["stats"]["best_streak"], 5);
}

#[test]
fn several_rounds_are_all_recorded() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .write_stdin("\ny\n\n\nn\n\n\nyes\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete! Streak: 1 | Best: 5"));

    let data = read(&path);
    let mut asked = 0;
    let mut items: Vec<&Value> = data["questions"].as_array().unwrap().iter().collect();
    items.extend(data["code_reviews"].as_array().unwrap().iter());
    for item in items {
        let times_asked = item["times_asked"].as_u64().unwrap();
        let times_correct = item["times_correct"].as_u64().unwrap();
        assert!(times_correct <= times_asked);
        asked += times_asked;
    }
    // The fixture starts with five attempts in total.
    assert_eq!(asked, 5 + 3);
}

#[test]
fn quitting_before_grading_leaves_file_untouched() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .write_stdin("\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer:"))
        .stdout(predicate::str::contains("Session complete! Streak: 3 | Best: 5"));

    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn closed_input_is_a_quit() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete!"))
        .stdout(predicate::str::contains("Answer:").not());

    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn unknown_fields_survive_a_save() {
    let mut fixture: Value = serde_json::from_str(FIXTURE).unwrap();
    fixture["generator_version"] = Value::from("2");
    fixture["questions"][1]["tags"] = Value::from(vec!["month-end"]);
    let (home, path) = setup(&serde_json::to_string_pretty(&fixture).unwrap());

    trivia_cmd(home.path())
        .args(&["b", "billing"])
        .write_stdin("\ny\nq\n")
        .assert()
        .success();

    let data = read(&path);
    assert_eq!(data["generator_version"], "2");
    assert_eq!(data["questions"][1]["tags"][0], "month-end");
    assert_eq!(data["questions"][1]["times_asked"], 5);
}

#[test]
fn read_only_data_file_aborts_the_session() {
    let (home, path) = setup(FIXTURE);
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions).unwrap();
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        // Running with privileges that ignore file permissions.
        return;
    }

    trivia_cmd(home.path())
        .args(&["biz", "bill"])
        .write_stdin("\ny\nq\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Session complete!").not())
        .stderr(predicate::str::contains("Error: cannot write to file"));

    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn extra_arguments_are_ignored() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .args(&["biz", "bill", "extra"])
        .write_stdin("\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Nice! Streak: 4"));

    assert_eq!(read(&path)["questions"][1]["times_asked"], 5);
}

#[test]
fn unrecognised_response_counts_as_wrong() {
    let (home, path) = setup(FIXTURE);
    trivia_cmd(home.path())
        .args(&["biz", "bill"])
        .write_stdin("\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You'll get it next time"))
        .stdout(predicate::str::contains("Session complete! Streak: 0 | Best: 5"));

    let data = read(&path);
    assert_eq!(data["questions"][1]["times_asked"], 5);
    assert_eq!(data["questions"][1]["times_correct"], 2);
}

fn trivia_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("trivia"));
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Create a home directory holding a data file with `contents`.
fn setup(contents: &str) -> (TempDir, PathBuf) {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("devmaxxing").join("trivia");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("questions.json");
    fs::write(&path, contents).unwrap();
    (home, path)
}

fn read(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    assert!(text.starts_with("{\n  \""), "not pretty-printed: {}", text);
    serde_json::from_str(&text).unwrap()
}

fn assert_is_date(value: &Value) {
    let date = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    let text = value.as_str().unwrap();
    assert!(date.is_match(text), "not a date: {}", text);
}
