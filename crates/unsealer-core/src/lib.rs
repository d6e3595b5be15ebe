// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the unsealer workspace.
//!
//! This crate provides the error type, the key and result types, and the
//! [`Unsealer`] trait that sits between the driver and the vault binary.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::UnsealError;
pub use traits::Unsealer;
pub use types::{RunSummary, UnsealKey, UnsealOutput, UnsealStatus};
