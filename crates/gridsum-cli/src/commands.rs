//! Command implementations.
//!
//! Each command writes its primary output to the given writer so `main`
//! can pass stdout and tests can pass a buffer.

use std::fs;
use std::io::Write;

use gridsum_benchmark::{BenchmarkConfig, Comparison, ComparisonReport, ReportFormat};
use gridsum_config::{
    ConfigError, DirectorySourceConfig, RunConfig, SourceConfig, SyntheticSourceConfig,
};
use gridsum_core::{write_csv, CsvDirectory, DatasetSource, GridSumError, SyntheticSource, Target};

use crate::cli::{Commands, GenerateArgs, RunArgs};
use crate::error::{CliError, Outcome};

/// Dispatches a parsed command.
pub fn execute<W: Write>(command: Commands, out: &mut W) -> Result<Outcome, CliError> {
    match command {
        Commands::Run(args) => run(args, out),
        Commands::Generate(args) => generate(&args, out),
        Commands::Sizes { data_dir } => {
            for size in CsvDirectory::new(data_dir).discover_sizes()? {
                writeln!(out, "{size}")?;
            }
            Ok(Outcome::Success)
        }
    }
}

/// Runs the comparison and writes the report.
pub fn run<W: Write>(args: RunArgs, out: &mut W) -> Result<Outcome, CliError> {
    let format = ReportFormat::from(args.format);
    let quiet = args.quiet;
    let config = resolve_config(args)?;
    if !quiet {
        gridsum_console::init();
    }

    let benchmark = BenchmarkConfig::from_run_config(&config);

    let report = match &config.source {
        SourceConfig::Directory(dir) => {
            let source = CsvDirectory::new(&dir.path);
            let sizes = if dir.discover {
                source.discover_sizes()?
            } else {
                config.sizes.clone()
            };
            if sizes.is_empty() {
                return Err(GridSumError::DataSource {
                    path: dir.path.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no data_list_<N>.csv files found",
                    ),
                }
                .into());
            }
            compare(benchmark, source, &sizes, config.target)?
        }
        SourceConfig::Synthetic(synthetic) => {
            let source = synthetic_source(synthetic.seed, synthetic.range());
            compare(benchmark, source, &config.sizes, config.target)?
        }
    };

    format.write(&report, &mut *out)?;
    out.flush()?;

    if report.processed_count() > 0 {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::NothingProcessed)
    }
}

fn compare<Src: DatasetSource>(
    config: BenchmarkConfig,
    source: Src,
    sizes: &[usize],
    target: Target,
) -> Result<ComparisonReport, GridSumError> {
    Comparison::new(config, source).run(sizes, target)
}

fn synthetic_source(seed: u64, range: Option<(i64, i64)>) -> SyntheticSource {
    match range {
        Some((min_value, max_value)) => SyntheticSource::new(seed).with_range(min_value, max_value),
        None => SyntheticSource::new(seed),
    }
}

/// Builds the effective configuration: file first, then flags.
pub fn resolve_config(args: RunArgs) -> Result<RunConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(target) = args.target {
        config.target = target;
    }
    if !args.sizes.is_empty() {
        config.sizes = args.sizes;
    }
    if let Some(runs) = args.runs {
        config.benchmark.run_count = runs;
    }
    if let Some(warmup) = args.warmup {
        config.benchmark.warmup_count = warmup;
    }
    if let Some(millis) = args.time_limit_ms {
        config = config.with_time_limit_millis(millis);
    }

    if let Some(path) = args.data_dir {
        let discover = match &config.source {
            SourceConfig::Directory(dir) => dir.discover,
            SourceConfig::Synthetic(_) => false,
        };
        config.source = SourceConfig::Directory(DirectorySourceConfig { path, discover });
    } else if args.synthetic {
        if let SourceConfig::Directory(_) = config.source {
            config.source = SourceConfig::Synthetic(SyntheticSourceConfig::default());
        }
    }

    if let Some(seed) = args.seed {
        match &mut config.source {
            SourceConfig::Synthetic(synthetic) => synthetic.seed = seed,
            SourceConfig::Directory(_) => {
                return Err(ConfigError::Invalid(
                    "--seed applies to synthetic datasets only".to_string(),
                ))
            }
        }
    }

    if args.discover {
        match &mut config.source {
            SourceConfig::Directory(dir) => dir.discover = true,
            SourceConfig::Synthetic(_) => {
                return Err(ConfigError::Invalid(
                    "--discover requires a data directory".to_string(),
                ))
            }
        }
    }

    config.validate()?;
    Ok(config)
}

/// Writes synthetic dataset files.
pub fn generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<Outcome, CliError> {
    if args.sizes.contains(&0) {
        return Err(ConfigError::Invalid("dataset sizes must be at least 1".to_string()).into());
    }

    fs::create_dir_all(&args.out).map_err(|source| GridSumError::DataSource {
        path: args.out.clone(),
        source,
    })?;

    let source = synthetic_source(args.seed, args.min.zip(args.max));
    let dir = CsvDirectory::new(&args.out);
    for &size in &args.sizes {
        let dataset = source.generate(size)?;
        let path = dir.path_for(size);
        write_csv(&dataset, &path)?;
        writeln!(out, "{}", path.display())?;
    }
    Ok(Outcome::Success)
}
