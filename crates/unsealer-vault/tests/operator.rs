// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs `VaultOperator` against a fake vault CLI script.

#![cfg(unix)]

use serial_test::serial;
use unsealer_core::{UnsealKey, UnsealStatus, Unsealer};
use unsealer_test_utils::fixtures::{fake_vault, recorded_calls};
use unsealer_vault::{report_outcome, ReportStyle, VaultOperator};

#[tokio::test]
#[serial]
async fn accepted_key_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_vault(dir.path(), &["K1"]).unwrap();
    let operator = VaultOperator::new(script.display().to_string());

    let output = operator.unseal(&UnsealKey::new("K1")).await.unwrap();

    assert_eq!(output.status(), UnsealStatus::Accepted);
    assert_eq!(recorded_calls(dir.path()), vec!["operator unseal K1"]);

    let mut buf = Vec::new();
    report_outcome(&mut buf, &UnsealKey::new("K1"), &output, ReportStyle::default()).unwrap();
    assert!(String::from_utf8(buf)
        .unwrap()
        .contains("Successfully unsealed with key: K1"));
}

#[tokio::test]
#[serial]
async fn rejected_key_captures_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_vault(dir.path(), &["K1"]).unwrap();
    let operator = VaultOperator::new(script.display().to_string());

    let output = operator.unseal(&UnsealKey::new("K2")).await.unwrap();

    assert_eq!(output.exit_code, 2);
    assert_eq!(output.stderr.trim(), "sealed: too few keys");

    let mut buf = Vec::new();
    report_outcome(&mut buf, &UnsealKey::new("K2"), &output, ReportStyle::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Failed to unseal with key: K2"));
    assert!(text.contains("sealed: too few keys"));
}

#[tokio::test]
#[serial]
async fn address_is_exported_to_child() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("vault");
    std::fs::write(&script, "#!/bin/sh\nprintf '%s' \"$VAULT_ADDR\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let operator = VaultOperator::new(script.display().to_string())
        .with_address("https://vault.test:8200");
    let output = operator.unseal(&UnsealKey::new("k")).await.unwrap();

    assert!(output.success());
    assert_eq!(output.stdout, "https://vault.test:8200");
}
