//! Configuration
//!
//! Command line arguments, with environment variable fallbacks.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Rebate calculator configuration
#[derive(Debug, Parser)]
#[command(name = "rebates", about = "Rebate calculator", long_about = None)]
pub struct Config {
    /// Directory holding `products/` and `rebates/` YAML fixtures; built-in data is used when omitted
    #[arg(long, env = "REBATES_FIXTURES", global = true)]
    pub fixtures: Option<PathBuf>,

    /// Fixture set name
    #[arg(
        long,
        env = "REBATES_FIXTURE_SET",
        default_value = "default",
        global = true
    )]
    pub fixture_set: String,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run; defaults to `interactive`
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// The command to run.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}

/// Commands
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List products and rebates
    List,

    /// Calculate a single rebate
    Calculate(CalculateArgs),

    /// Prompt for calculations until `exit`
    Interactive,
}

/// Arguments for a single calculation
#[derive(Debug, Clone, PartialEq, Args)]
pub struct CalculateArgs {
    /// Rebate identifier
    #[arg(long)]
    pub rebate: String,

    /// Product identifier
    #[arg(long)]
    pub product: String,

    /// Volume purchased
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Decimal,
}
