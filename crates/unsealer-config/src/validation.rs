// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde attributes cannot express,
//! such as non-empty paths, a nonzero threshold and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::UnsealerConfig;

/// Log levels accepted by `output.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &UnsealerConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.keys.file.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "keys.file must not be empty".to_string(),
        });
    }

    if config.keys.threshold == 0 {
        errors.push(ConfigError::Validation {
            message: "keys.threshold must be at least 1".to_string(),
        });
    }

    if config.vault.binary.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "vault.binary must not be empty".to_string(),
        });
    }

    if let Some(address) = config.vault.address.as_deref() {
        let addr = address.trim();
        if !(addr.starts_with("http://") || addr.starts_with("https://")) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "vault.address `{addr}` must start with http:// or https://"
                ),
            });
        }
    }

    let level = config.output.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "output.log_level `{}` is not one of {}",
                config.output.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
