//! End-to-end tests for the `intstream-lab` binary.
//!
//! Run: cargo test --test cli_test

// The binary only exists with the cli feature
#![cfg(feature = "cli")]
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output};

fn intstream_lab(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intstream-lab"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn intstream-lab")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Claim 1: No flags runs the demo fixture with default config
#[test]
fn claim_01_defaults_run_fixture() {
    let output = intstream_lab(&[]);
    let text = stdout_of(&output);

    assert!(output.status.success(), "Claim 1 FALSIFIED: non-zero exit");
    assert!(text.starts_with("Input: [10, -5, 20, 15, 20, 0, 7, 14]"));
    assert!(text.contains("Sum: 81"));
    assert!(text.contains("Skip 2 / Limit 3: [20, 15, 20]"));
    assert!(text.trim_end().ends_with("Demo completed successfully."));
}

/// Claim 2: Config file overrides defaults, CLI flags override the file
#[test]
fn claim_02_cli_over_file_over_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "filter: odd\nskip: 0\nlimit: 2").unwrap();
    let path = file.path().to_str().unwrap();

    let output = intstream_lab(&["--config", path, "--limit", "4"]);
    let text = stdout_of(&output);

    assert!(output.status.success());
    // file value
    assert!(text.contains("Filter (Odd): [-5, 15, 7]"));
    // file skip, CLI limit
    assert!(text.contains("Skip 0 / Limit 4: [10, -5, 20, 15]"));
    // untouched default
    assert!(text.contains("Map (Scale(2)):"));
}

/// Claim 3: Unparsable --values aborts with non-zero exit and no report
#[test]
fn claim_03_bad_values_fail() {
    let output = intstream_lab(&["--values", "1,two,3"]);
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();

    assert!(!output.status.success(), "Claim 3 FALSIFIED: bad input exited 0");
    assert!(stdout_of(&output).is_empty());
    assert!(stderr.contains("two"));
}

/// Claim 4: Missing config file aborts with non-zero exit
#[test]
fn claim_04_missing_config_fails() {
    let output = intstream_lab(&["--config", "/nonexistent/intstream-lab.yaml"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
}

/// Claim 5: Explicit values, including negatives and empty input
#[test]
fn claim_05_explicit_values() {
    let output = intstream_lab(&["--values=-3,4,-3"]);
    let text = stdout_of(&output);
    assert!(output.status.success());
    assert!(text.contains("Distinct & Sorted: [-3, 4]"));

    let output = intstream_lab(&["--values", ""]);
    let text = stdout_of(&output);
    assert!(output.status.success());
    assert!(text.contains("Count: 0"));
    assert!(text.contains("Average: none"));
}
