// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable status lines for unseal attempts.
//!
//! Status lines go to stdout; nothing here is meant to be machine-parsed.

use std::io::Write;

use unsealer_core::{UnsealKey, UnsealOutput};

/// Printed once when the key file holds fewer keys than the threshold.
pub const INSUFFICIENT_KEYS_MESSAGE: &str = "Error: Not enough keys found in the file.";

/// How status lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStyle {
    /// Replace key values with [`mask_secret`] output.
    pub mask_keys: bool,
    /// Colour the line green/red.
    pub color: bool,
}

impl ReportStyle {
    fn key_text(&self, key: &UnsealKey) -> String {
        if self.mask_keys {
            mask_secret(key.expose())
        } else {
            key.expose().to_string()
        }
    }
}

/// Write the status line for one unseal attempt.
///
/// By default the full key value is printed. Operators who do not want key
/// shares in terminal scrollback set `output.mask_keys`.
pub fn report_outcome<W: Write + ?Sized>(
    out: &mut W,
    key: &UnsealKey,
    output: &UnsealOutput,
    style: ReportStyle,
) -> std::io::Result<()> {
    let key_text = style.key_text(key);
    let line = if output.success() {
        format!("Successfully unsealed with key: {key_text}")
    } else {
        format!(
            "Failed to unseal with key: {key_text}. Error: {}",
            output.stderr.trim_end()
        )
    };

    if style.color {
        use colored::Colorize;
        let line = if output.success() {
            line.green()
        } else {
            line.red()
        };
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{line}")
    }
}

/// Write the "not enough keys" message.
pub fn report_insufficient<W: Write + ?Sized>(out: &mut W, style: ReportStyle) -> std::io::Result<()> {
    if style.color {
        use colored::Colorize;
        writeln!(out, "{}", INSUFFICIENT_KEYS_MESSAGE.red())
    } else {
        writeln!(out, "{INSUFFICIENT_KEYS_MESSAGE}")
    }
}

/// Mask a secret for display: first and last four characters, or `****`
/// for values shorter than ten characters.
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len < 10 {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    let suffix: String = value.chars().skip(len - 4).collect();
    format!("{prefix}...{suffix}")
}
