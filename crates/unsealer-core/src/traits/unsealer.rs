// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unseal invoker trait.

use async_trait::async_trait;

use crate::error::UnsealError;
use crate::types::{UnsealKey, UnsealOutput};

/// Submits a single unseal key share to a vault.
///
/// Implementations run exactly one unseal attempt per call and never retry.
/// A rejected key is not an error: it comes back as an [`UnsealOutput`] with a
/// nonzero exit code. `Err` is reserved for failures to run the attempt at all.
#[async_trait]
pub trait Unsealer: Send + Sync {
    /// Human-readable name of the backend, used in logs.
    fn name(&self) -> &str;

    /// Submit `key` and wait for the attempt to finish.
    async fn unseal(&self, key: &UnsealKey) -> Result<UnsealOutput, UnsealError>;
}
