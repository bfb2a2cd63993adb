//! # acervus: Inventory Tracker CLI
//!
//! Thin front end over `acervus-store`. Without a subcommand it runs the
//! numbered interactive menu; with one it performs a single action and
//! saves if the action changed anything.
//!
//! ## Exit Codes
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | Domain or persistence error               |
//! | 2    | Invalid configuration or command line     |

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod commands;
pub mod menu;
pub mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use acervus_store::{ConfigError, StoreConfig};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::{Action, CommandResult, EXIT_CONFIG};

const VERBOSE_FILTER: &str = "warn,acervus_core=debug,acervus_store=debug,acervus_cli=debug";

#[derive(Debug, Parser)]
#[command(
    name = "acervus",
    version,
    about = "Acervus inventory tracker",
    long_about = "Track a product catalog and a sales ledger kept in two plain text files.",
    after_help = "Examples:\n  acervus add Rice 50 45.00\n  acervus sell rice 20\n  acervus report --json\n  acervus"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Catalog file (default: report.txt)")]
    catalog: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH", help = "Ledger file (default: sales_report.txt)")]
    ledger: Option<PathBuf>,

    #[arg(long, global = true, value_name = "LABEL", help = "Currency label printed after totals")]
    currency: Option<String>,

    #[arg(short, long, global = true, help = "Log store activity to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Action(Action),
    #[command(about = "Run the interactive menu (the default)")]
    Menu,
}

impl Cli {
    /// Applies command line overrides on top of `base`.
    fn config(&self, base: StoreConfig) -> StoreConfig {
        let mut config = base;
        if let Some(path) = &self.catalog {
            config = config.catalog_path(path);
        }
        if let Some(path) = &self.ledger {
            config = config.ledger_path(path);
        }
        if let Some(currency) = &self.currency {
            config = config.currency(currency);
        }
        config
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match resolve_config(&cli) {
        Ok(config) => {
            debug!(?config, "Resolved configuration");
            match cli.command {
                Some(Command::Action(action)) => commands::execute(&config, action),
                Some(Command::Menu) | None => menu::run(&config),
            }
        }
        Err(err) => CommandResult {
            exit_code: EXIT_CONFIG,
            output: format!("Error [CONFIG]: {err}"),
        },
    };

    if !result.output.is_empty() {
        if result.is_success() {
            println!("{}", result.output);
        } else {
            eprintln!("{}", result.output);
        }
    }
    ExitCode::from(result.exit_code)
}

fn resolve_config(cli: &Cli) -> Result<StoreConfig, ConfigError> {
    StoreConfig::from_env().map(|base| cli.config(base))
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["acervus"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["acervus", "menu"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Menu)));
    }

    #[test]
    fn test_parse_actions() {
        let cli = Cli::try_parse_from(["acervus", "add", "Basmati Rice", "50", "45.00"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Action(Action::Add { ref name, ref quantity, ref price }))
                if name == "Basmati Rice" && quantity == "50" && price == "45.00"
        ));

        let cli = Cli::try_parse_from(["acervus", "report", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Action(Action::Report { json: true }))
        ));
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from(["acervus", "sell", "Rice", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Action(Action::Sell { ref quantity, .. })) if quantity == "-5"
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "acervus",
            "view",
            "--catalog",
            "/tmp/catalog.txt",
            "--currency",
            "USD",
        ])
        .unwrap();

        let config = cli.config(StoreConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/catalog.txt"));
        assert_eq!(config.ledger_path, PathBuf::from("sales_report.txt"));
        assert_eq!(config.currency, "USD");
    }
}
