//! Report rendering for comparison results.
//!
//! Each renderer wraps a [`ComparisonReport`] and implements
//! [`Display`](fmt::Display); [`ReportFormat`] picks one at runtime.

use std::fmt;
use std::io::{self, Write};

use gridsum_core::PairMatch;

use crate::comparison::{ComparisonReport, Speedup, Timing};

const RULE_WIDTH: usize = 80;

/// Output format for a comparison report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width console table followed by the analysis.
    #[default]
    Table,
    /// Markdown document.
    Markdown,
    /// One CSV record per processed size.
    Csv,
}

impl ReportFormat {
    /// Renders `report` in this format.
    ///
    /// # Example
    ///
    /// ```
    /// use gridsum_benchmark::{ComparisonReport, ReportFormat};
    ///
    /// let report = ComparisonReport::new("Empty", 0);
    /// assert!(ReportFormat::Csv.render(&report).starts_with("size,readings,"));
    /// assert!(ReportFormat::Markdown.render(&report).starts_with("# Empty"));
    /// ```
    pub fn render(self, report: &ComparisonReport) -> String {
        match self {
            ReportFormat::Table => ConsoleTable::new(report).to_string(),
            ReportFormat::Markdown => MarkdownReport::new(report).to_string(),
            ReportFormat::Csv => CsvExporter::new(report).to_string(),
        }
    }

    /// Writes `report` in this format to a writer.
    pub fn write<W: Write>(self, report: &ComparisonReport, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render(report).as_bytes())
    }
}

/// Fixed-width console table with skipped sizes and the analysis narrative.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::{BenchmarkConfig, Comparison, ConsoleTable};
/// use gridsum_core::SyntheticSource;
///
/// let report = Comparison::new(BenchmarkConfig::new("Grid").with_run_count(1), SyntheticSource::new(1))
///     .run(&[10], 0)
///     .unwrap();
/// let table = ConsoleTable::new(&report).to_string();
///
/// assert!(table.contains("Data Size    Brute Force (s) Hash Table (s)  Speedup"));
/// assert!(table.contains("ALGORITHM ANALYSIS"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTable<'a> {
    report: &'a ComparisonReport,
}

impl<'a> ConsoleTable<'a> {
    pub fn new(report: &'a ComparisonReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for ConsoleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let heavy = "=".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{}", report.name)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Target sum: {}", report.target)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<12} {:<15} {:<15} {:<15} {}",
            "Data Size", "Brute Force (s)", "Hash Table (s)", "Speedup", "Result Found"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for row in &report.rows {
            writeln!(
                f,
                "{:<12} {:<15} {:<15} {:<15} {}",
                row.size,
                seconds(&row.brute_force),
                seconds(&row.hash_table),
                speedup(row.speedup),
                found(row.found),
            )?;
        }
        if report.rows.is_empty() {
            writeln!(f, "(no dataset size was processed)")?;
        }

        if !report.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped sizes:")?;
            for skipped in &report.skipped {
                writeln!(f, "  - {}: {}", skipped.size, skipped.reason)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "ALGORITHM ANALYSIS")?;
        writeln!(f, "{heavy}")?;
        write!(f, "{}", report.analysis())
    }
}

/// Markdown report generator.
///
/// Generates a results table, the skipped sizes, and the analysis
/// narrative in a fenced block.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownReport<'a> {
    report: &'a ComparisonReport,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(report: &'a ComparisonReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "# {}", report.name)?;
        writeln!(f)?;
        writeln!(f, "- **Target sum**: {}", report.target)?;
        writeln!(f, "- **Sizes processed**: {}", report.processed_count())?;
        writeln!(f, "- **Sizes skipped**: {}", report.skipped.len())?;
        writeln!(f)?;

        writeln!(f, "## Results")?;
        writeln!(f)?;
        if report.rows.is_empty() {
            writeln!(f, "*No dataset size was processed.*")?;
        } else {
            writeln!(
                f,
                "| Data Size | Brute Force (s) | Hash Table (s) | Speedup | Result Found |"
            )?;
            writeln!(
                f,
                "|----------:|----------------:|---------------:|--------:|:------------:|"
            )?;
            for row in &report.rows {
                writeln!(
                    f,
                    "| {} | {} | {} | {} | {} |",
                    row.size,
                    seconds(&row.brute_force),
                    seconds(&row.hash_table),
                    speedup(row.speedup),
                    found(row.found),
                )?;
            }
        }
        writeln!(f)?;

        if !report.skipped.is_empty() {
            writeln!(f, "## Skipped Sizes")?;
            writeln!(f)?;
            for skipped in &report.skipped {
                writeln!(f, "- **{}** ({}): {}", skipped.size, skipped.kind, skipped.reason)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Analysis")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", report.analysis())?;
        writeln!(f, "```")
    }
}

/// CSV exporter for comparison rows.
///
/// Exports one record per processed size with raw seconds, the speedup
/// value and both returned pairs. Unmeasured cells are left empty.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::{ComparisonReport, ComparisonRow, CsvExporter, Timing};
/// use gridsum_core::SolveResult;
/// use std::time::Duration;
///
/// let mut report = ComparisonReport::new("csv", 0);
/// report.rows.push(ComparisonRow::new(
///     10,
///     10,
///     Timing::Measured { mean: Duration::from_millis(2), outcome: SolveResult::NotFound },
///     Timing::TimedOut { limit: Duration::from_millis(1) },
/// ));
///
/// let csv = CsvExporter::new(&report).to_string();
/// assert!(csv.contains("10,10,0.002000,,,,false,,"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter<'a> {
    report: &'a ComparisonReport,
}

impl<'a> CsvExporter<'a> {
    pub fn new(report: &'a ComparisonReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for CsvExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "size,readings,brute_force_s,hash_table_s,speedup,speedup_capped,found,brute_force_pair,hash_table_pair"
        )?;

        for row in &self.report.rows {
            writeln!(
                f,
                "{},{},{},{},{},{},{},{},{}",
                row.size,
                row.dataset_len,
                csv_seconds(&row.brute_force),
                csv_seconds(&row.hash_table),
                row.speedup
                    .map(|s| format!("{:.2}", s.value()))
                    .unwrap_or_default(),
                row.speedup
                    .map(|s| s.is_capped().to_string())
                    .unwrap_or_default(),
                row.found.map(|b| b.to_string()).unwrap_or_default(),
                csv_pair(row.brute_force_pair()),
                csv_pair(row.hash_table_pair()),
            )?;
        }
        Ok(())
    }
}

fn seconds(timing: &Timing) -> String {
    match timing.mean() {
        Some(mean) => format!("{:.6}", mean.as_secs_f64()),
        None => "timeout".to_string(),
    }
}

fn csv_seconds(timing: &Timing) -> String {
    timing
        .mean()
        .map(|mean| format!("{:.6}", mean.as_secs_f64()))
        .unwrap_or_default()
}

fn speedup(speedup: Option<Speedup>) -> String {
    speedup.map_or_else(|| "n/a".to_string(), |s| s.to_string())
}

fn found(found: Option<bool>) -> &'static str {
    match found {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "n/a",
    }
}

fn csv_pair(pair: Option<PairMatch>) -> String {
    pair.map(|p| format!("{}:{}", p.first_index, p.second_index))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{ComparisonRow, SkippedSize};
    use gridsum_core::SolveResult;
    use std::time::Duration;

    fn sample_report() -> ComparisonReport {
        let found = SolveResult::Found(PairMatch::new(0, 1, 2, 7));
        let mut report = ComparisonReport::new("Energy Two-Sum Performance Analysis", 9);
        report.rows.push(ComparisonRow::new(
            4,
            4,
            Timing::Measured {
                mean: Duration::from_micros(3),
                outcome: found,
            },
            Timing::Measured {
                mean: Duration::from_micros(2),
                outcome: found,
            },
        ));
        report.rows.push(ComparisonRow::new(
            1_000,
            1_000,
            Timing::TimedOut {
                limit: Duration::from_millis(1),
            },
            Timing::Measured {
                mean: Duration::ZERO,
                outcome: SolveResult::NotFound,
            },
        ));
        report.skipped.push(SkippedSize {
            size: 100,
            kind: "data_source",
            reason: "Data source error: data_list_100.csv: missing".to_string(),
        });
        report
    }

    #[test]
    fn test_console_table() {
        let table = ConsoleTable::new(&sample_report()).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "Energy Two-Sum Performance Analysis");
        assert!(table.contains("Target sum: 9"));
        assert!(lines.contains(&"4            0.000003        0.000002        1.50x           Yes"));
        assert!(lines.contains(&"1000         timeout         0.000000        n/a             No"));
        assert!(table.contains("Skipped sizes:\n  - 100: Data source error"));
        assert!(table.contains("ALGORITHM ANALYSIS"));
        assert!(table.contains("1. TIME COMPLEXITY"));
    }

    #[test]
    fn test_console_table_empty() {
        let report = ComparisonReport::new("Empty", 0);
        let table = ConsoleTable::new(&report).to_string();
        assert!(table.contains("(no dataset size was processed)"));
        assert!(table.contains("nothing to analyze"));
    }

    #[test]
    fn test_markdown() {
        let md = MarkdownReport::new(&sample_report()).to_string();

        assert!(md.starts_with("# Energy Two-Sum Performance Analysis\n"));
        assert!(md.contains("- **Sizes processed**: 2"));
        assert!(md.contains("| 4 | 0.000003 | 0.000002 | 1.50x | Yes |"));
        assert!(md.contains("| 1000 | timeout | 0.000000 | n/a | No |"));
        assert!(md.contains("- **100** (data_source): Data source error"));
        assert!(md.contains("```text\n1. TIME COMPLEXITY"));
        assert!(md.trim_end().ends_with("```"));
    }

    #[test]
    fn test_csv() {
        let csv = CsvExporter::new(&sample_report()).to_string();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("size,readings,brute_force_s"));
        assert_eq!(lines[1], "4,4,0.000003,0.000002,1.50,false,true,0:1,0:1");
        assert_eq!(lines[2], "1000,1000,,0.000000,,,false,,");
    }

    #[test]
    fn test_capped_speedup_rendering() {
        let mut report = ComparisonReport::new("Capped", 0);
        report.rows.push(ComparisonRow::new(
            10,
            10,
            Timing::Measured {
                mean: Duration::from_micros(5),
                outcome: SolveResult::NotFound,
            },
            Timing::Measured {
                mean: Duration::ZERO,
                outcome: SolveResult::NotFound,
            },
        ));

        assert!(ReportFormat::Table.render(&report).contains(">1000000.00x"));
        assert!(ReportFormat::Csv
            .render(&report)
            .contains("10,10,0.000005,0.000000,1000000.00,true,false,,"));
    }

    #[test]
    fn test_write_to_writer() {
        let mut buffer = Vec::new();
        ReportFormat::Csv
            .write(&sample_report(), &mut buffer)
            .unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("size,"));
    }
}
