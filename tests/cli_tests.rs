//! End-to-end tests for the `chordfamily` subcommands.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Path to the chordfamily binary
fn chordfamily_bin() -> &'static str {
    env!("CARGO_BIN_EXE_chordfamily")
}

#[test]
fn test_chords_plain() {
    let output = Command::new(chordfamily_bin())
        .args(["chords", "D#"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("D# Major"));
    assert!(stdout.contains("iii   F##m"));
    assert!(stdout.contains("Key Signature:   9 ♯"));
    assert!(stdout.contains("Relative Minor:  B#m"));
    assert!(stdout.contains("B#m → G# → D# → A#"));
}

#[test]
fn test_chords_json() {
    let output = Command::new(chordfamily_bin())
        .args(["chords", "g", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["key"], "G");
    assert_eq!(result["chords"].as_array().map(Vec::len), Some(7));
    assert_eq!(result["chords"][6]["numeral"], "vii°");
    assert_eq!(result["chords"][6]["chord"], "F#°");
    assert_eq!(result["chords"][6]["quality"], "diminished");
    assert_eq!(result["key_signature"], "1 ♯");
    assert_eq!(result["circle_position"], "1 o'clock");
    assert_eq!(result["pentatonic"]["position2"], "10th fret (A string)");
}

#[test]
fn test_chords_unknown_key() {
    let output = Command::new(chordfamily_bin())
        .args(["chords", "Bb"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown key 'Bb'"));
}

#[test]
fn test_key_flag_rejected_with_subcommand() {
    let output = Command::new(chordfamily_bin())
        .args(["--key", "D", "chords", "C"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--key"));
}

#[test]
fn test_keys_json() {
    let output = Command::new(chordfamily_bin())
        .args(["keys", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let rows = rows.as_array().expect("Should be an array");

    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["key"], "C");
    assert_eq!(rows[0]["key_signature"], "No ♯/♭");
    assert_eq!(rows[10]["key"], "A#");
    assert_eq!(rows[10]["relative_minor"], "F##m");
}

#[test]
fn test_keys_naturals_plain() {
    let output = Command::new(chordfamily_bin())
        .args(["keys", "--naturals"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus seven natural keys
    assert_eq!(stdout.lines().count(), 8);
    let keys: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(keys, vec!["C", "D", "E", "F", "G", "A", "B"]);
}

#[test]
fn test_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_arg = config_path.to_str().unwrap();

    let output = Command::new(chordfamily_bin())
        .args(["config", "--file", config_arg, "init"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(config_path.exists());

    // Second init without --force is refused
    let output = Command::new(chordfamily_bin())
        .args(["config", "--file", config_arg, "init"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    fs::write(&config_path, "[ui]\nshow_pentatonic = false\n").unwrap();

    let output = Command::new(chordfamily_bin())
        .args(["config", "--file", config_arg, "show", "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let config: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    assert_eq!(config["ui"]["show_pentatonic"], false);
    assert_eq!(config["ui"]["show_neighbor_previews"], true);
    assert_eq!(config["ui"]["theme_mode"], "Auto");
}

#[test]
fn test_config_show_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "not = [valid").unwrap();

    let output = Command::new(chordfamily_bin())
        .args(["config", "--file", config_path.to_str().unwrap(), "show"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
}
