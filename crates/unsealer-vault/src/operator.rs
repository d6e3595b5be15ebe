// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vault operator unseal` invocation.
//!
//! Each call spawns one child process with the key as an argument and waits
//! for it to exit. There is no timeout: a hung vault CLI hangs the run.

use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;
use unsealer_config::model::VaultConfig;
use unsealer_core::{UnsealError, UnsealKey, UnsealOutput, Unsealer};

/// Environment variable the vault CLI reads its server address from.
pub const VAULT_ADDR_ENV_VAR: &str = "VAULT_ADDR";

/// Unseals by shelling out to the vault CLI.
#[derive(Debug, Clone)]
pub struct VaultOperator {
    binary: String,
    address: Option<String>,
}

impl VaultOperator {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            address: None,
        }
    }

    pub fn from_config(config: &VaultConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            address: config.address.clone(),
        }
    }

    /// Export `address` as `VAULT_ADDR` to the child.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn command(&self, key: &UnsealKey) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.binary);
        command
            .arg("operator")
            .arg("unseal")
            .arg(key.expose())
            .stdin(Stdio::null());
        if let Some(address) = &self.address {
            command.env(VAULT_ADDR_ENV_VAR, address);
        }
        command
    }
}

#[async_trait]
impl Unsealer for VaultOperator {
    fn name(&self) -> &str {
        "vault-cli"
    }

    async fn unseal(&self, key: &UnsealKey) -> Result<UnsealOutput, UnsealError> {
        debug!(binary = %self.binary, "running operator unseal");

        let output = self
            .command(key)
            .output()
            .await
            .map_err(|source| UnsealError::ProcessSpawn {
                binary: self.binary.clone(),
                source,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(binary = %self.binary, exit_code, "operator unseal finished");

        Ok(UnsealOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
