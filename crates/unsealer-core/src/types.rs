// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the key reader, the unseal invoker and the driver.

use secrecy::{ExposeSecret, SecretString};
use strum::Display;

/// A single unseal key share.
///
/// The value is zeroized on drop and redacted from `Debug` output. Call
/// [`UnsealKey::expose`] at the point where the raw value is actually needed.
pub struct UnsealKey(SecretString);

impl UnsealKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// The raw key value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for UnsealKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl std::fmt::Debug for UnsealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnsealKey([REDACTED])")
    }
}

impl PartialEq for UnsealKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for UnsealKey {}

impl From<&str> for UnsealKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UnsealKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Captured result of one unseal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsealOutput {
    /// Process exit code. `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl UnsealOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn status(&self) -> UnsealStatus {
        if self.success() {
            UnsealStatus::Accepted
        } else {
            UnsealStatus::Rejected
        }
    }
}

/// Outcome of a single unseal attempt, as recorded in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum UnsealStatus {
    Accepted,
    Rejected,
}

/// Terminal state of a driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// Too few keys in the file; the unseal operation was never invoked.
    InsufficientKeys { found: usize, required: usize },
    /// Every key up to the threshold was submitted once.
    Attempted { succeeded: usize, failed: usize },
}

impl RunSummary {
    /// Number of unseal invocations made during the run.
    pub fn invocations(&self) -> usize {
        match self {
            RunSummary::InsufficientKeys { .. } => 0,
            RunSummary::Attempted { succeeded, failed } => succeeded + failed,
        }
    }
}
