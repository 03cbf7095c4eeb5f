//! CLI argument definitions for the locus-data tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use locus_model::{ColumnSet, GeoLevel, OutcomeDataset};

#[derive(Parser)]
#[command(
    name = "locus-data",
    version,
    about = "Load CBP and ACS tables from a data directory",
    long_about = "Load County Business Patterns (CBP) functional data and American\n\
                  Community Survey (ACS) outcome data from a fixed directory layout.\n\
                  Every column is loaded as text; tables can be previewed in the\n\
                  terminal or exported as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format.
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
    /// Load per-year CBP slices for a list of years.
    Year(YearArgs),

    /// Load per-industry CBP slices by NAICS code or digit count.
    Naics(NaicsArgs),

    /// Load per-geography CBP slices for a list of geography codes.
    Geo(GeoArgs),

    /// Load the complete CBP dataset for a geography level.
    Functional(FunctionalArgs),

    /// Load an ACS outcome export.
    Outcome(OutcomeArgs),

    /// Load the outcome metadata table.
    Metadata(MetadataArgs),

    /// Build a wide outcome table from the metadata query.
    Extract(ExtractArgs),
}

/// Arguments shared by every subcommand.
#[derive(Args)]
pub struct CommonArgs {
    /// Root of the data directory tree.
    #[arg(long = "data-root", value_name = "DIR")]
    pub data_root: PathBuf,

    /// Disable the progress bar during multi-file loads.
    #[arg(long = "quiet-progress")]
    pub quiet_progress: bool,

    /// Write the loaded table to a CSV file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of rows to preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 10)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct YearArgs {
    /// Years to load, comma separated (for example 2010,2011,2012).
    #[arg(long = "years", value_name = "YEARS", value_delimiter = ',', required = true)]
    pub years: Vec<i32>,

    /// Geography level of the tables.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    /// Column handling: the strict set for the level, or everything.
    #[arg(long = "columns", value_enum, default_value = "strict")]
    pub columns: ColumnSetArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct NaicsArgs {
    /// NAICS codes to load, comma separated.
    #[arg(
        long = "codes",
        value_name = "CODES",
        value_delimiter = ',',
        conflicts_with = "level"
    )]
    pub codes: Vec<String>,

    /// Load every code with this many digits instead of explicit codes.
    #[arg(long = "level", value_name = "N")]
    pub level: Option<u8>,

    /// Geography level of the tables.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    /// Column handling: the strict set for the level, or everything.
    #[arg(long = "columns", value_enum, default_value = "strict")]
    pub columns: ColumnSetArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct GeoArgs {
    /// Geography codes to load, comma separated (for example 08031,08001).
    #[arg(long = "codes", value_name = "CODES", value_delimiter = ',', required = true)]
    pub codes: Vec<String>,

    /// Geography level of the tables.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    /// Column handling: the strict set for the level, or everything.
    #[arg(long = "columns", value_enum, default_value = "strict")]
    pub columns: ColumnSetArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct FunctionalArgs {
    /// Geography level of the dataset.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct OutcomeArgs {
    /// Geography level of the export.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    /// Which outcome export to load.
    #[arg(long = "dataset", value_enum, default_value = "cleaned")]
    pub dataset: DatasetArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Geography level of the outcome data.
    #[arg(long = "geo-level", value_enum, default_value = "county")]
    pub geo_level: GeoLevelArg,

    /// Which outcome export to extract from.
    #[arg(long = "dataset", value_enum, default_value = "cleaned")]
    pub dataset: DatasetArg,

    /// Restrict the metadata query to one topic.
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topic: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// CLI geography level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum GeoLevelArg {
    County,
    Msa,
}

impl From<GeoLevelArg> for GeoLevel {
    fn from(arg: GeoLevelArg) -> Self {
        match arg {
            GeoLevelArg::County => GeoLevel::County,
            GeoLevelArg::Msa => GeoLevel::Msa,
        }
    }
}

/// CLI column handling choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnSetArg {
    Strict,
    All,
}

impl From<ColumnSetArg> for ColumnSet {
    fn from(arg: ColumnSetArg) -> Self {
        match arg {
            ColumnSetArg::Strict => ColumnSet::Strict,
            ColumnSetArg::All => ColumnSet::All,
        }
    }
}

/// CLI outcome dataset choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    All,
    Cleaned,
}

impl From<DatasetArg> for OutcomeDataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::All => OutcomeDataset::All,
            DatasetArg::Cleaned => OutcomeDataset::Cleaned,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}
