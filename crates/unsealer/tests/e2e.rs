// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests running the compiled binary against a fake vault CLI.
//!
//! Each test gets its own temp directory with a key file, a config file
//! pointing at it, and a `vault` shell script that records its arguments.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::Output;

use serial_test::serial;
use unsealer_test_utils::fixtures::{fake_vault, recorded_calls};
use unsealer_test_utils::KeyFileFixture;

struct Scenario {
    fixture: KeyFileFixture,
    config: PathBuf,
}

impl Scenario {
    fn new(keys: &[&str], accepted: &[&str]) -> Self {
        Self::from_fixture(KeyFileFixture::with_keys(keys).unwrap(), accepted)
    }

    fn from_fixture(fixture: KeyFileFixture, accepted: &[&str]) -> Self {
        let vault = fake_vault(fixture.dir(), accepted).unwrap();
        let config = fixture.dir().join("unsealer.toml");
        std::fs::write(
            &config,
            format!(
                "[keys]\nfile = \"{}\"\n\n[vault]\nbinary = \"{}\"\n\n[output]\nlog_level = \"error\"\n",
                fixture.path().display(),
                vault.display()
            ),
        )
        .unwrap();
        Self { fixture, config }
    }

    fn dir(&self) -> &Path {
        self.fixture.dir()
    }

    fn run(&self, extra: &[&str]) -> Output {
        self.run_with_env(extra, &[])
    }

    fn run_with_env(&self, extra: &[&str], vars: &[(&str, &str)]) -> Output {
        std::process::Command::new(env!("CARGO_BIN_EXE_unsealer"))
            .arg("--config")
            .arg(&self.config)
            .arg("--plain")
            .args(extra)
            .env_remove("RUST_LOG")
            .envs(vars.iter().copied())
            .current_dir(self.dir())
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
#[serial]
fn three_accepted_keys() {
    let scenario = Scenario::new(&["k1", "k2", "k3"], &["k1", "k2", "k3"]);

    let output = scenario.run(&[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Successfully unsealed with key: k1\n\
         Successfully unsealed with key: k2\n\
         Successfully unsealed with key: k3\n"
    );
    assert_eq!(
        recorded_calls(scenario.dir()),
        vec!["operator unseal k1", "operator unseal k2", "operator unseal k3"]
    );
}

#[test]
#[serial]
fn only_first_three_of_five_keys_are_used() {
    let scenario = Scenario::new(&["k1", "k2", "k3", "k4", "k5"], &["k1", "k2", "k3"]);

    let output = scenario.run(&[]);

    assert!(output.status.success());
    let calls = recorded_calls(scenario.dir());
    assert_eq!(calls.len(), 3);
    assert!(!stdout(&output).contains("k4"));
}

#[test]
#[serial]
fn rejected_keys_still_exit_zero() {
    let scenario = Scenario::new(&["K1", "K2", "K3"], &["K1"]);

    let output = scenario.run(&[]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Successfully unsealed with key: K1"));
    assert!(text.contains("Failed to unseal with key: K2. Error: sealed: too few keys"));
    assert!(text.contains("Failed to unseal with key: K3"));
    assert_eq!(recorded_calls(scenario.dir()).len(), 3);
}

#[test]
#[serial]
fn too_few_keys_prints_error_and_skips_vault() {
    let scenario = Scenario::new(&["k1", "k2"], &["k1", "k2"]);

    let output = scenario.run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error: Not enough keys found in the file.\n");
    assert!(recorded_calls(scenario.dir()).is_empty());
}

#[test]
#[serial]
fn too_few_keys_is_quiet_on_stderr_at_default_log_level() {
    let scenario = Scenario::new(&["k1"], &[]);
    let config = format!(
        "[keys]\nfile = \"{}\"\n",
        scenario.fixture.path().display()
    );
    std::fs::write(&scenario.config, config).unwrap();

    let output = scenario.run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Error: Not enough keys found in the file.\n");
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
#[serial]
fn env_override_changes_threshold() {
    let scenario = Scenario::new(&["k1", "k2"], &["k1", "k2"]);

    let output = scenario.run_with_env(&[], &[("UNSEALER_KEYS_THRESHOLD", "2")]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout(&output),
        "Successfully unsealed with key: k1\n\
         Successfully unsealed with key: k2\n"
    );
    assert_eq!(recorded_calls(scenario.dir()).len(), 2);
}

#[test]
#[serial]
fn missing_key_file_exits_nonzero() {
    let scenario = Scenario::new(&["k1", "k2", "k3"], &[]);
    std::fs::remove_file(scenario.fixture.path()).unwrap();

    let output = scenario.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read key file"));
    assert!(recorded_calls(scenario.dir()).is_empty());
}

#[test]
#[serial]
fn malformed_key_line_exits_nonzero() {
    let fixture =
        KeyFileFixture::with_contents("Unseal Key 1: k1\nUnseal Key 2 k2\nUnseal Key 3: k3\n")
            .unwrap();
    let scenario = Scenario::from_fixture(fixture, &["k1"]);

    let output = scenario.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
    assert!(recorded_calls(scenario.dir()).is_empty());
}

#[test]
#[serial]
fn check_does_not_invoke_vault() {
    let scenario = Scenario::new(&["aaaabbbbccccdddd", "k2", "k3"], &[]);

    let output = scenario.run(&["check"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("3 unseal key(s), threshold 3"));
    assert!(!text.contains("aaaabbbbccccdddd"));
    assert!(recorded_calls(scenario.dir()).is_empty());
}

#[test]
#[serial]
fn invalid_config_is_rendered_and_exits_nonzero() {
    let scenario = Scenario::new(&["k1", "k2", "k3"], &[]);
    std::fs::write(&scenario.config, "[keys]\ntreshold = 3\n").unwrap();

    let output = scenario.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("treshold"));
    assert!(recorded_calls(scenario.dir()).is_empty());
}
