// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `unsealer check`: inspect the key file without touching the vault.

use std::io::Write;
use std::path::Path;

use unsealer_config::UnsealerConfig;
use unsealer_core::UnsealError;
use unsealer_vault::{mask_secret, read_keys};

/// Read the key file and print how many keys it holds against the threshold.
///
/// Keys are always masked here. Returns the number of keys found, or
/// [`UnsealError::InsufficientKeys`] when there are fewer than the threshold.
pub fn run_check<W: Write + ?Sized>(config: &UnsealerConfig, out: &mut W) -> Result<usize, UnsealError> {
    let path = Path::new(&config.keys.file);
    let keys = read_keys(path)?;
    let required = config.keys.threshold;

    writeln!(
        out,
        "{}: {} unseal key(s), threshold {}",
        path.display(),
        keys.len(),
        required
    )?;
    for (idx, key) in keys.iter().take(required).enumerate() {
        writeln!(out, "  key {}: {}", idx + 1, mask_secret(key.expose()))?;
    }

    if keys.len() < required {
        return Err(UnsealError::InsufficientKeys {
            found: keys.len(),
            required,
        });
    }
    Ok(keys.len())
}
