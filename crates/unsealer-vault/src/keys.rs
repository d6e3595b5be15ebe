// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key file parsing.
//!
//! The key file is the text printed by `vault operator init`: one
//! `Unseal Key <n>: <value>` line per share, mixed with other lines
//! (root token, threshold notes) that are ignored.

use std::path::Path;

use tracing::{debug, info};
use unsealer_core::{UnsealError, UnsealKey};
use zeroize::Zeroizing;

/// Lines starting with this prefix carry an unseal key.
pub const KEY_PREFIX: &str = "Unseal Key";

/// Separates the key label from its value.
pub const KEY_DELIMITER: &str = ": ";

/// Read every unseal key from `path`, in file order.
///
/// The file is read fully and closed before returning. Its contents are
/// zeroized once parsed.
pub fn read_keys(path: &Path) -> Result<Vec<UnsealKey>, UnsealError> {
    let contents = std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| UnsealError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

    let keys = parse_keys(path, &contents)?;
    info!(path = %path.display(), count = keys.len(), "read unseal keys");
    Ok(keys)
}

/// Extract unseal keys from `contents`.
///
/// `origin` only labels errors. A line that starts with [`KEY_PREFIX`] but has
/// no [`KEY_DELIMITER`] fails with [`UnsealError::Format`]; everything after the
/// first delimiter, trimmed, is the key. No deduplication or format checks.
pub fn parse_keys(origin: &Path, contents: &str) -> Result<Vec<UnsealKey>, UnsealError> {
    let mut keys = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if !line.starts_with(KEY_PREFIX) {
            continue;
        }
        let (_, value) = line
            .split_once(KEY_DELIMITER)
            .ok_or_else(|| UnsealError::Format {
                path: origin.to_path_buf(),
                line: idx + 1,
            })?;
        keys.push(UnsealKey::new(value.trim()));
    }

    debug!(origin = %origin.display(), count = keys.len(), "parsed key lines");
    Ok(keys)
}
