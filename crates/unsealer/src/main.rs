// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! unsealer - submit vault unseal keys from a key file.
//!
//! This is the binary entry point.

mod check;
mod unseal;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use unsealer_config::UnsealerConfig;
use unsealer_vault::{ReportStyle, VaultOperator};

/// unseal a vault with the key shares from a key file.
#[derive(Parser, Debug)]
#[command(name = "unsealer", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable coloured status lines.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Submit unseal keys to the vault (default).
    Unseal,
    /// Read the key file and report the key count without contacting the vault.
    Check,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => unsealer_config::load_and_validate_path(path),
        None => unsealer_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            unsealer_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.output.log_level);

    let style = ReportStyle {
        mask_keys: config.output.mask_keys,
        color: !cli.plain && std::io::stdout().is_terminal(),
    };

    let result = match cli.command.unwrap_or(Commands::Unseal) {
        Commands::Unseal => run_default(&config, style).await,
        Commands::Check => {
            let mut out = std::io::stdout().lock();
            check::run_check(&config, &mut out).map(|_| ())
        }
    };

    if let Err(e) = result {
        let _ = std::io::stdout().flush();
        eprintln!("unsealer: {e}");
        std::process::exit(1);
    }
}

async fn run_default(
    config: &UnsealerConfig,
    style: ReportStyle,
) -> Result<(), unsealer_core::UnsealError> {
    let operator = VaultOperator::from_config(&config.vault);
    let mut out = std::io::stdout().lock();
    let summary = unseal::run_unseal(config, &operator, &mut out, style).await?;
    info!(?summary, "unseal run complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr; stdout carries only the status lines.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let level = log_level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("unsealer={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_unseal() {
        let cli = Cli::try_parse_from(["unsealer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn check_accepts_global_flags() {
        let cli =
            Cli::try_parse_from(["unsealer", "check", "--config", "/etc/u.toml", "--plain"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/u.toml")));
        assert!(cli.plain);
    }

    #[test]
    fn unknown_positional_is_rejected() {
        assert!(Cli::try_parse_from(["unsealer", "/tmp/keys.txt"]).is_err());
    }
}
