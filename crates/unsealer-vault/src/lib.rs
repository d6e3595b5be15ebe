// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault-facing pieces of unsealer.
//!
//! - [`keys`]: reads `Unseal Key <n>: <value>` lines from the key file.
//! - [`operator`]: submits a key through `vault operator unseal`.
//! - [`report`]: formats per-key status lines.

pub mod keys;
pub mod operator;
pub mod report;

pub use keys::{parse_keys, read_keys};
pub use operator::VaultOperator;
pub use report::{mask_secret, report_insufficient, report_outcome, ReportStyle};
