//! CLI argument definitions for the comparison table.

use std::path::PathBuf;

use algebra_model::{Column, SortOrder};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "algebra-table",
    version,
    about = "Algebraic Structures Comparison - sortable table with definitions",
    long_about = "Compare groups, rings, fields and related structures.\n\n\
                  Sort the table by any column and look up the definitions\n\
                  attached to structure names, types, columns and relations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read structures from a TOML catalog instead of the built-in set.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Print the comparison table.
    Table(TableArgs),

    /// List every column with its definition.
    Columns,

    /// Print the annotation panel for hovered cells and headers.
    Annotate(AnnotateArgs),
}

#[derive(Parser)]
pub struct TableArgs {
    /// Column key to sort by (e.g. name, type, zeroDiv).
    #[arg(long = "sort", value_name = "COLUMN", value_parser = parse_column)]
    pub sort: Option<Column>,

    /// Sort direction; only meaningful together with --sort.
    #[arg(long = "order", value_enum, default_value = "asc")]
    pub order: OrderArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: TableFormatArg,
}

#[derive(Parser)]
pub struct AnnotateArgs {
    /// Structure name, as hovering its name cell.
    #[arg(long = "structure", value_name = "NAME")]
    pub structure: Option<String>,

    /// Type label, as hovering a type cell (e.g. "Group, Ring").
    #[arg(long = "type", value_name = "LABEL")]
    pub type_label: Option<String>,

    /// Column key, as hovering a column header.
    #[arg(long = "column", value_name = "COLUMN", value_parser = parse_column)]
    pub column: Option<Column>,

    /// Relation label, as hovering a relations cell.
    #[arg(long = "relation", value_name = "LABEL")]
    pub relation: Option<String>,
}

fn parse_column(value: &str) -> Result<Column, String> {
    value.parse::<Column>().map_err(|error| {
        let keys: Vec<&str> = Column::ALL.iter().map(Column::key).collect();
        format!("{error} (expected one of: {})", keys.join(", "))
    })
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableFormatArg {
    Table,
    Json,
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
