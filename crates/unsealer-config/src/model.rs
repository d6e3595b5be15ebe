// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for unsealer.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Key file read when no configuration overrides it.
pub const DEFAULT_KEY_FILE: &str = "/tmp/keys.txt";

/// Number of key shares submitted to the vault.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Vault executable looked up on `PATH`.
pub const DEFAULT_VAULT_BINARY: &str = "vault";

/// Top-level unsealer configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional; the defaults reproduce the fixed behavior of
/// reading `/tmp/keys.txt` and submitting three keys to `vault`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UnsealerConfig {
    /// Key file settings.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Vault CLI settings.
    #[serde(default)]
    pub vault: VaultConfig,

    /// Status output and logging settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where unseal keys come from and how many are used.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeysConfig {
    /// Path of the text file holding `Unseal Key <n>: <value>` lines.
    #[serde(default = "default_key_file")]
    pub file: String,

    /// Number of keys submitted, taken positionally from the top of the file.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            file: default_key_file(),
            threshold: default_threshold(),
        }
    }
}

fn default_key_file() -> String {
    DEFAULT_KEY_FILE.to_string()
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

/// Vault CLI invocation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultConfig {
    /// Executable name or path of the vault CLI.
    #[serde(default = "default_vault_binary")]
    pub binary: String,

    /// Vault server address exported to the child as `VAULT_ADDR`.
    /// `None` leaves the inherited environment untouched.
    #[serde(default)]
    pub address: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            binary: default_vault_binary(),
            address: None,
        }
    }
}

fn default_vault_binary() -> String {
    DEFAULT_VAULT_BINARY.to_string()
}

/// Status output and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Mask key values in status lines instead of printing them in full.
    #[serde(default)]
    pub mask_keys: bool,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mask_keys: false,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
