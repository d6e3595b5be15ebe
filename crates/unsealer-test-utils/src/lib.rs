// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for unsealer tests.
//!
//! # Components
//!
//! - [`MockUnsealer`] - unseal backend with scripted outcomes and call capture
//! - [`KeyFileFixture`] - temporary key file in `vault operator init` format
//! - [`fixtures::fake_vault`] - executable stand-in for the vault CLI (unix)

pub mod fixtures;
pub mod mock_unsealer;

pub use fixtures::KeyFileFixture;
pub use mock_unsealer::{MockOutcome, MockUnsealer};
