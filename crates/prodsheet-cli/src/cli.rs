//! CLI argument definitions for prodsheet.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use prodsheet_model::SchemaConfig;

#[derive(Parser)]
#[command(
    name = "prodsheet",
    version,
    about = "Production checklist generator - reconcile quantities against the product registry",
    long_about = "Reconcile a production-quantity export against the product registry and\n\
                  produce a per-location preparation checklist, both on screen and as a\n\
                  paginated PDF document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the two inputs and render the checklist.
    Run(RunArgs),

    /// List the required columns of both input tables.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// CSV export of the production quantity table.
    #[arg(value_name = "QUANTITY_CSV")]
    pub quantity_csv: PathBuf,

    /// CSV export of the product registry.
    #[arg(value_name = "REGISTRY_CSV")]
    pub registry_csv: PathBuf,

    /// Production date shown in the document header (YYYY-MM-DD).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Where to write the PDF checklist (default: production_summary.pdf).
    #[arg(long = "pdf", value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Skip PDF generation.
    #[arg(long = "no-pdf")]
    pub no_pdf: bool,

    /// Write the aggregated summary as JSON to the given path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Product key column name, shared by both tables.
    #[arg(long = "product-column", value_name = "NAME")]
    pub product_column: Option<String>,

    /// Raw quantity column name in the quantity table.
    #[arg(long = "quantity-column", value_name = "NAME")]
    pub quantity_column: Option<String>,

    /// Location column name in the registry table.
    #[arg(long = "location-column", value_name = "NAME")]
    pub location_column: Option<String>,

    /// Production factor column name in the registry table.
    #[arg(long = "factor-column", value_name = "NAME")]
    pub factor_column: Option<String>,
}

impl RunArgs {
    /// Folds the column-name overrides into a schema configuration.
    pub fn schema_config(&self) -> SchemaConfig {
        let mut config = SchemaConfig::default();
        if let Some(name) = &self.product_column {
            config.quantity.product = name.clone();
            config.registry.product = name.clone();
        }
        if let Some(name) = &self.quantity_column {
            config.quantity.quantity = name.clone();
        }
        if let Some(name) = &self.location_column {
            config.registry.location = name.clone();
        }
        if let Some(name) = &self.factor_column {
            config.registry.factor = name.clone();
        }
        config
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_run_with_overrides() {
        let cli = Cli::parse_from([
            "prodsheet",
            "run",
            "quantities.csv",
            "registry.csv",
            "--date",
            "2024-03-09",
            "--factor-column",
            "production factor",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.date.is_some());
        let config = args.schema_config();
        assert_eq!(config.registry.factor, "production factor");
        assert_eq!(config.quantity.quantity, "quantity");
    }

    #[test]
    fn parses_columns_command() {
        let cli = Cli::parse_from(["prodsheet", "columns"]);
        assert!(matches!(cli.command, Command::Columns));
    }
}
