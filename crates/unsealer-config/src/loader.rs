// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./unsealer.toml` > `~/.config/unsealer/unsealer.toml` > `/etc/unsealer/unsealer.toml`
//! with environment variable overrides via `UNSEALER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::UnsealerConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/unsealer/unsealer.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "unsealer.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "UNSEALER_";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/unsealer/unsealer.toml` (system-wide)
/// 3. `~/.config/unsealer/unsealer.toml` (user XDG config)
/// 4. `./unsealer.toml` (local directory)
/// 5. `UNSEALER_*` environment variables
pub fn load_config() -> Result<UnsealerConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<UnsealerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UnsealerConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the XDG lookup, a missing file here is an error: the operator named it.
pub fn load_config_from_path(path: &Path) -> Result<UnsealerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UnsealerConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(UnsealerConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// `~/.config/unsealer/unsealer.toml`, when a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("unsealer/unsealer.toml"))
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// key names survive: `UNSEALER_OUTPUT_MASK_KEYS` must map to `output.mask_keys`,
/// not `output.mask.keys`.
///
/// The closure receives the prefix-stripped name in its original case (`KEYS_FILE`).
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name (any case) to a dotted config key.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["keys", "vault", "output"] {
        if let Some(field) = key.strip_prefix(section).and_then(|k| k.strip_prefix('_')) {
            return format!("{section}.{field}");
        }
    }
    key
}
