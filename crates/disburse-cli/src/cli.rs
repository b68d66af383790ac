//! CLI argument definitions for disburse.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `csv` | Export the completed-payments list as CSV |
//!
//! # Examples
//!
//! ```bash
//! disburse csv --api-key KEY --token TOKEN
//! DISBURSE_TRELLO_API_KEY=KEY DISBURSE_TRELLO_TOKEN=TOKEN disburse csv --out paid.csv
//! disburse -v csv --api-key KEY --token TOKEN --utc-offset -05:00
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};

use disburse_core::{COMPLETED_LIST_ID, DEFAULT_API_BASE, DEFAULT_OUTPUT_PATH};

/// Financial aid disbursement export tool.
///
/// Reads the "payment completed" list of the disbursement board and writes
/// one CSV row per card.
#[derive(Debug, Parser)]
#[command(name = "disburse", author, version, about = "Disbursement board export tool")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export requests in CSV form.
    ///
    /// # Examples
    ///
    ///   disburse csv --api-key KEY --token TOKEN
    ///   disburse csv --api-key KEY --token TOKEN --out recipients.csv
    Csv(CsvArgs),
}

/// Arguments for the `csv` command.
#[derive(Debug, Args)]
pub struct CsvArgs {
    /// Board API key (falls back to DISBURSE_TRELLO_API_KEY).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Board API token (falls back to DISBURSE_TRELLO_TOKEN).
    #[arg(long)]
    pub token: Option<String>,

    /// Path of the CSV file to create or overwrite.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub out: String,

    /// Identifier of the list holding completed payments.
    #[arg(long, default_value = COMPLETED_LIST_ID)]
    pub list: String,

    /// Base URL of the board API.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Offset used for date columns, as +HH:MM, -HH:MM, or UTC.
    #[arg(long, default_value = "UTC", allow_hyphen_values = true)]
    pub utc_offset: String,

    /// Per-request timeout in milliseconds. Without it, requests wait indefinitely.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}
