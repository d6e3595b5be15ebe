// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the driver and the outside world.
//!
//! Traits use `#[async_trait]` so the driver can hold a `&dyn Unsealer`.

pub mod unsealer;

pub use unsealer::Unsealer;
