// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the unsealer workspace.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across the key reader, the unseal invoker and the driver.
#[derive(Debug, Error)]
pub enum UnsealError {
    /// The key file is missing or cannot be read.
    #[error("cannot read key file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line starts with the key prefix but has no `": "` delimiter.
    ///
    /// Only the line number is carried: the line itself may hold key material.
    #[error("malformed unseal key line {line} in {}: missing \": \" delimiter", path.display())]
    Format { path: PathBuf, line: usize },

    /// Fewer keys were found than the unseal threshold requires.
    #[error("not enough keys found in the file: found {found}, need {required}")]
    InsufficientKeys { found: usize, required: usize },

    /// The vault binary could not be located or spawned.
    #[error("failed to spawn `{binary}`: {source}")]
    ProcessSpawn {
        binary: String,
        source: std::io::Error,
    },

    /// Writing the status report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
