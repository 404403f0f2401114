//! CLI argument definitions for stockview.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | Render the listing screen once |
//! | `details` | Render the details screen for one symbol |
//! | `browse` | Navigate list → details interactively |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--mock` | `false` | Serve bundled sample payloads |
//! | `--locale` | `pt-BR` | Display language (pt-BR, en) |
//! | `--api-key` | env or `demo` | Alpha Vantage API key |
//! | `--base-url` | env or Alpha Vantage | API base URL |
//! | `--timeout-ms` | `5000` | Request timeout in ms |
//! | `--log-format` | `text` | Log line format on stderr |

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockview_core::config::DEFAULT_TIMEOUT_MS;
use stockview_core::Locale;

/// Browse the Alpha Vantage listing and recent daily prices.
#[derive(Debug, Parser)]
#[command(
    name = "stockview",
    author,
    version,
    about = "Browse listed stocks and their recent daily prices",
    long_about = "stockview fetches the Alpha Vantage symbol listing and the daily \
time series of a selected symbol, and renders them as two screens:\n\
\n\
  • list     every listed symbol with its name\n\
  • details  the five most recent trading days of one symbol\n\
\n\
The API key is read from --api-key, then STOCKVIEW_ALPHAVANTAGE_API_KEY, \
then falls back to the public 'demo' key, which only serves daily \
prices for IBM. Get a free key at https://www.alphavantage.co/support/#api-key."
)]
pub struct Cli {
    /// Output format for rendered screens.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Serve bundled sample payloads instead of calling the API.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Display language for messages and labels.
    #[arg(long, global = true, env = "STOCKVIEW_LOCALE", default_value = "pt-BR")]
    pub locale: Locale,

    /// Alpha Vantage API key; overrides STOCKVIEW_ALPHAVANTAGE_API_KEY.
    ///
    /// Without one the public `demo` key is used, which only serves daily prices for IBM.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL; overrides STOCKVIEW_ALPHAVANTAGE_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log line format on stderr; verbosity comes from STOCKVIEW_LOG.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable screen rendering.
    Table,
    /// JSON envelope per rendered screen.
    Json,
}

/// Log line format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the listing screen once.
    ///
    /// # Examples
    ///
    ///   stockview list
    ///   stockview list --format json --pretty
    List,

    /// Render the details screen for one symbol.
    ///
    /// # Examples
    ///
    ///   stockview details IBM
    ///   stockview details ibm --locale en
    Details(DetailsArgs),

    /// Browse interactively: pick a symbol from the list, then go back.
    ///
    /// In the list, type a row number or a symbol. In details, press Enter
    /// or type v/b/back to return. Type q anywhere to quit.
    Browse,
}

#[derive(Debug, Args)]
pub struct DetailsArgs {
    /// Ticker to show, e.g. IBM.
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stockview",
            "details",
            "ibm",
            "--format",
            "json",
            "--locale",
            "en",
            "--mock",
        ])
        .expect("arguments parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.locale, Locale::En);
        assert!(cli.mock);
        match cli.command {
            Command::Details(args) => assert_eq!(args.symbol, "ibm"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_locale() {
        let result = Cli::try_parse_from(["stockview", "list", "--locale", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn verifies_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
