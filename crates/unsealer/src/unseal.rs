// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default command: read the key file and submit keys up to the threshold.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};
use unsealer_config::UnsealerConfig;
use unsealer_core::{RunSummary, UnsealError, Unsealer};
use unsealer_vault::{read_keys, report_insufficient, report_outcome, ReportStyle};

/// Read keys from `config.keys.file` and submit the first `config.keys.threshold`
/// of them through `unsealer`, one after another.
///
/// A short key file prints a single error line and makes no attempts. A
/// rejected key is reported and the run continues with the next one; only
/// read, spawn, and output failures abort.
pub async fn run_unseal<W: Write + ?Sized>(
    config: &UnsealerConfig,
    unsealer: &dyn Unsealer,
    out: &mut W,
    style: ReportStyle,
) -> Result<RunSummary, UnsealError> {
    let keys = read_keys(Path::new(&config.keys.file))?;
    let required = config.keys.threshold;

    if keys.len() < required {
        debug!(found = keys.len(), required, "not enough unseal keys");
        report_insufficient(out, style)?;
        out.flush()?;
        return Ok(RunSummary::InsufficientKeys {
            found: keys.len(),
            required,
        });
    }

    let mut succeeded = 0;
    let mut failed = 0;
    for (idx, key) in keys.iter().take(required).enumerate() {
        let output = unsealer.unseal(key).await?;
        info!(
            share = idx + 1,
            backend = unsealer.name(),
            status = %output.status(),
            exit_code = output.exit_code,
            "unseal attempt finished"
        );
        if output.success() {
            succeeded += 1;
        } else {
            failed += 1;
        }
        report_outcome(out, key, &output, style)?;
    }
    out.flush()?;

    Ok(RunSummary::Attempted { succeeded, failed })
}
