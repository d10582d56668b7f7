//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated HOME and verify outputs.
//! The image provider points at a closed port, so every recipe falls back to
//! the placeholder image without network access.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const PLACEHOLDER: &str = "https://placehold.co/600x400/png?text=Recipe+Image";

fn cli(home: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pantry-cli"));
    command
        .args(args)
        .env("HOME", home)
        .env_remove("PANTRY_CHEF_ENV")
        .env_remove("PEXELS_API_KEY")
        .env("PANTRY_CHEF_IMAGE_ENDPOINT", "http://127.0.0.1:1/v1/search");
    command
}

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = cli(home, args)
        .output()
        .expect("Failed to execute CLI command");
    split_output(output)
}

/// Run a CLI command with `input` piped to stdin.
fn run_cli_with_stdin(home: &Path, args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = cli(home, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI command");
    split_output(output)
}

fn split_output(output: Output) -> (i32, String, String) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("recipe"));
    assert!(stdout.contains("feedback"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_suggest_without_ingredients_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["recipe", "suggest"]);
    assert_eq!(code, 1);
    assert!(
        stderr.contains("error: Please add at least one ingredient"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_suggest_json_offline() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(
        home.path(),
        &["recipe", "suggest", "chicken", "rice", "--json", "--seed", "4"],
    );
    assert_eq!(code, 0, "stderr was: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let recipes = parsed.as_array().unwrap();
    assert_eq!(recipes.len(), 3);
    for recipe in recipes {
        assert_eq!(recipe["image"], PLACEHOLDER);
        assert_eq!(recipe["ingredients"][0]["name"], "chicken");
        assert_eq!(recipe["ingredients"][1]["name"], "rice");
        assert_eq!(recipe["ingredients"].as_array().unwrap().len(), 5);
        assert_eq!(recipe["instructions"].as_array().unwrap().len(), 9);
    }
}

#[test]
fn test_suggest_text_accepts_comma_list() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipe", "suggest", "salmon, lemon"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1. "));
    assert!(stdout.contains(" salmon with lemon"));
    assert!(stdout.contains("Instructions:"));
}

#[test]
fn test_config_get_and_set() {
    let home = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "images.per_page"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "15");

    let (code, _, _) = run_cli(home.path(), &["config", "set", "images.per_page", "20"]);
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "images.per_page"]);
    assert_eq!(stdout.trim(), "20");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "set", "images.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: images.nope"));
}

#[test]
fn test_feedback_requires_fields() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &[
            "feedback", "send", "--name", "Ada", "--email", "", "--message", "hi",
            "--server", "http://127.0.0.1:1",
        ],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Missing required fields"));
}

#[test]
fn test_interactive_session_manages_favorites() {
    let home = tempfile::tempdir().unwrap();
    let session = "search\n\
                   search chicken, rice\n\
                   fav 1\n\
                   fav 1\n\
                   favs\n\
                   show 2\n\
                   unfav 1\n\
                   favs\n\
                   quit\n";
    let (code, stdout, stderr) = run_cli_with_stdin(
        home.path(),
        &["recipe", "interactive", "--seed", "6"],
        session,
    );
    assert_eq!(code, 0, "stderr was: {stderr}");

    assert!(stdout.contains("[Please add at least one ingredient]"));
    assert!(stdout.contains("[Recipe added to favorites!]"));
    assert!(stdout.contains("[Recipe is already in favorites]"));
    assert!(stdout.contains("[Recipe removed from favorites]"));

    // Search results are listed as "1. <name> (<minutes> min)".
    let first = stdout
        .lines()
        .map(|l| l.trim_start_matches("> "))
        .find(|l| l.starts_with("1. ") && l.contains(" chicken with rice ("))
        .expect("search results listed");
    let name = first
        .trim_start_matches("1. ")
        .split(" (")
        .next()
        .unwrap();
    assert!(stdout.contains(&format!("> 1. {name}\n")), "favorite listed");

    // `show 2` keeps the requested position in its heading.
    assert!(stdout
        .lines()
        .map(|l| l.trim_start_matches("> "))
        .any(|l| l.starts_with("2. ") && l.contains(" chicken with rice  (")));

    let (before_unfav, after_unfav) = stdout
        .split_once("[Recipe removed from favorites]")
        .unwrap();
    assert!(!before_unfav.contains("No favorites yet."));
    assert!(after_unfav.contains("No favorites yet."));
}
