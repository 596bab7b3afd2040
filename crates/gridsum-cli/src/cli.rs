//! CLI command definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gridsum_benchmark::ReportFormat;
use gridsum_core::SyntheticSource;

/// Two-sum energy balancing benchmark
#[derive(Debug, Parser)]
#[command(name = "gridsum", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare brute-force and hash-table solvers across dataset sizes
    Run(RunArgs),

    /// Write synthetic data_list_<N>.csv files
    Generate(GenerateArgs),

    /// List dataset sizes found in a data directory
    Sizes {
        /// Directory holding data_list_<N>.csv files
        #[arg(short, long)]
        data_dir: PathBuf,
    },
}

/// Options for `gridsum run`. Anything given here overrides the config file.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Configuration file (TOML, or YAML by .yaml/.yml extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sum to search for
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Dataset sizes, comma separated
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub sizes: Vec<usize>,

    /// Read data_list_<N>.csv files from this directory
    #[arg(short, long, conflicts_with = "synthetic")]
    pub data_dir: Option<PathBuf>,

    /// Benchmark every dataset file found in the data directory
    #[arg(long, conflicts_with_all = ["sizes", "synthetic"])]
    pub discover: bool,

    /// Generate datasets in memory instead of reading files
    #[arg(long)]
    pub synthetic: bool,

    /// Seed for synthetic datasets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Measured runs per solver and size
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// Unmeasured warmup runs per solver and size
    #[arg(short, long)]
    pub warmup: Option<usize>,

    /// Abandon a solver invocation after this many milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Suppress banner and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for `gridsum generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output directory (created if missing)
    #[arg(short, long)]
    pub out: PathBuf,

    /// Dataset sizes, comma separated
    #[arg(
        short,
        long,
        value_delimiter = ',',
        num_args = 1..,
        default_values_t = gridsum_config::DEFAULT_SIZES
    )]
    pub sizes: Vec<usize>,

    /// Generator seed
    #[arg(long, default_value_t = SyntheticSource::DEFAULT_SEED)]
    pub seed: u64,

    /// Lowest generated reading (default: scaled with each size)
    #[arg(long, allow_negative_numbers = true, requires = "max")]
    pub min: Option<i64>,

    /// Highest generated reading
    #[arg(long, allow_negative_numbers = true, requires = "min")]
    pub max: Option<i64>,
}

/// Report format on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Markdown,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}
