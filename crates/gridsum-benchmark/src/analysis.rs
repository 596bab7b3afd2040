//! Qualitative analysis derived from a comparison report.
//!
//! The numbers come from the measured rows; the text around them is fixed.
//! Rendering goes through [`Display`](fmt::Display) so every report format
//! shares one narrative.

use std::fmt;
use std::mem::size_of;
use std::time::Duration;

use gridsum_solver::{BruteForceSolver, Complexity, HashTableSolver, TwoSumSolver};
use num_format::{Locale, ToFormattedString};

use crate::comparison::{ComparisonReport, ComparisonRow, Speedup, Timing};

/// Wall-clock budget for real-time balancing decisions.
pub const REAL_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Auxiliary bytes the hash table stores per reading (key and index).
pub const HASH_ENTRY_BYTES: usize = size_of::<i64>() + size_of::<usize>();

// Highest hash-table exponent still read as linear growth.
const LINEAR_TOLERANCE: f64 = 1.5;

/// Growth facts for one solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverTrend {
    pub name: &'static str,
    pub complexity: Complexity,
    /// Exponent `k` of the theoretical `n^k` time bound.
    pub expected_exponent: f64,
    /// Least-squares slope of log(time) over log(n), if at least two sizes
    /// were measured with non-zero times.
    pub fitted_exponent: Option<f64>,
    /// Sizes at which this solver exceeded the time limit.
    pub timeouts: Vec<(usize, Duration)>,
}

impl SolverTrend {
    fn new<S: TwoSumSolver>(
        solver: S,
        expected_exponent: f64,
        rows: &[ComparisonRow],
        timing: fn(&ComparisonRow) -> &Timing,
    ) -> Self {
        let points: Vec<(f64, f64)> = rows
            .iter()
            .filter(|row| row.dataset_len > 0)
            .filter_map(|row| {
                let mean = timing(row).mean()?;
                (!mean.is_zero()).then(|| {
                    (
                        (row.dataset_len as f64).ln(),
                        mean.as_secs_f64().ln(),
                    )
                })
            })
            .collect();

        let timeouts = rows
            .iter()
            .filter_map(|row| match timing(row) {
                Timing::TimedOut { limit } => Some((row.dataset_len, *limit)),
                Timing::Measured { .. } => None,
            })
            .collect();

        Self {
            name: solver.name(),
            complexity: solver.complexity(),
            expected_exponent,
            fitted_exponent: fit_slope(&points),
            timeouts,
        }
    }
}

/// Observed growth between the smallest and largest measured datasets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    pub from_size: usize,
    pub to_size: usize,
    pub brute_force_factor: f64,
    pub hash_table_factor: f64,
}

/// Mean time of each solver on one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSnapshot {
    pub size: usize,
    pub brute_force: Timing,
    pub hash_table: Timing,
}

/// Facts behind the analysis narrative.
///
/// Sizes are dataset lengths, which differ from the requested size when a
/// file holds a different number of readings than its name says.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::{BenchmarkConfig, Comparison};
/// use gridsum_core::SyntheticSource;
///
/// let report = Comparison::new(BenchmarkConfig::new("demo").with_run_count(1), SyntheticSource::new(3))
///     .run(&[10, 100], 0)
///     .unwrap();
/// let analysis = report.analysis();
///
/// assert_eq!(analysis.largest_measured, Some(100));
/// assert!(analysis.to_string().contains("MEMORY TRADE-OFF"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub brute_force: SolverTrend,
    pub hash_table: SolverTrend,
    /// Largest dataset where both solvers completed.
    pub largest_measured: Option<usize>,
    /// Timings at the largest processed size.
    pub largest_processed: Option<SizeSnapshot>,
    pub growth: Option<Growth>,
    /// Highest speedup and the size where it occurred.
    pub best_speedup: Option<(usize, Speedup)>,
    /// Sizes where the solvers returned different pairs.
    pub diverging_sizes: Vec<usize>,
}

impl Analysis {
    /// Derives the analysis from the report rows.
    pub fn from_report(report: &ComparisonReport) -> Self {
        let rows = &report.rows;
        let measured: Vec<&ComparisonRow> = report.measured_rows().collect();

        let largest_processed = rows.last().map(|row| SizeSnapshot {
            size: row.dataset_len,
            brute_force: row.brute_force,
            hash_table: row.hash_table,
        });

        let growth = growth_between(&measured);

        let best_speedup = rows
            .iter()
            .filter_map(|row| row.speedup.map(|speedup| (row.dataset_len, speedup)))
            .max_by(|a, b| a.1.value().total_cmp(&b.1.value()));

        let diverging_sizes = rows
            .iter()
            .filter(|row| row.pairs_differ())
            .map(|row| row.dataset_len)
            .collect();

        Self {
            brute_force: SolverTrend::new(BruteForceSolver, 2.0, rows, |row| &row.brute_force),
            hash_table: SolverTrend::new(HashTableSolver, 1.0, rows, |row| &row.hash_table),
            largest_measured: measured.iter().map(|row| row.dataset_len).max(),
            largest_processed,
            growth,
            best_speedup,
            diverging_sizes,
        }
    }

    /// True when no dataset size was processed.
    pub fn is_empty(&self) -> bool {
        self.largest_measured.is_none() && self.largest_processed.is_none()
    }

    fn write_time_complexity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1. TIME COMPLEXITY")?;
        for trend in [&self.brute_force, &self.hash_table] {
            write!(
                f,
                "   - {}: {} expected (exponent {:.0})",
                trend.name, trend.complexity.time, trend.expected_exponent
            )?;
            match trend.fitted_exponent {
                Some(exponent) => writeln!(f, ", observed exponent {exponent:.2}")?,
                None => writeln!(f, ", observed exponent unavailable")?,
            }
        }
        match (self.brute_force.fitted_exponent, self.hash_table.fitted_exponent) {
            (Some(bf), Some(ht)) if bf - ht >= 0.5 => writeln!(
                f,
                "   Brute-force time grows markedly faster than hash-table time, \
                 in line with the quadratic and linear bounds."
            ),
            (Some(_), Some(_)) => writeln!(
                f,
                "   Measured growth rates are close at these sizes; early matches \
                 and timer resolution can hide the asymptotic gap."
            ),
            _ => writeln!(
                f,
                "   At least two measured sizes with non-zero times are needed to \
                 estimate growth."
            ),
        }
    }

    fn write_scalability(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "2. SCALABILITY")?;
        if let Some(n) = self.largest_measured {
            writeln!(
                f,
                "   - At {} readings brute force checks up to {} pairs; \
                 the hash table performs at most {} lookups.",
                n.to_formatted_string(&Locale::en),
                pair_count(n).to_formatted_string(&Locale::en),
                n.to_formatted_string(&Locale::en),
            )?;
        }
        match self.growth {
            Some(growth) => writeln!(
                f,
                "   - From {} to {} readings ({:.0}x more data) brute-force time \
                 grew {:.1}x and hash-table time {:.1}x.",
                growth.from_size.to_formatted_string(&Locale::en),
                growth.to_size.to_formatted_string(&Locale::en),
                growth.to_size as f64 / growth.from_size as f64,
                growth.brute_force_factor,
                growth.hash_table_factor,
            ),
            None => writeln!(f, "   - Growth needs two measured sizes with non-zero times."),
        }
    }

    fn write_memory(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "3. MEMORY TRADE-OFF")?;
        match self.largest_measured {
            Some(n) => writeln!(
                f,
                "   - {}: {} auxiliary space, up to {} bytes of keys and indices \
                 at {} readings, before table overhead.",
                self.hash_table.name,
                self.hash_table.complexity.space,
                hash_table_bytes(n).to_formatted_string(&Locale::en),
                n.to_formatted_string(&Locale::en),
            )?,
            None => writeln!(
                f,
                "   - {}: {} auxiliary space, {} bytes per reading.",
                self.hash_table.name, self.hash_table.complexity.space, HASH_ENTRY_BYTES,
            )?,
        }
        writeln!(
            f,
            "   - {}: {} auxiliary space; nothing is allocated beyond the dataset.",
            self.brute_force.name, self.brute_force.complexity.space,
        )
    }

    fn write_hashing(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "4. HASH COLLISIONS")?;
        writeln!(
            f,
            "   - Lookups and inserts are amortized O(1); colliding keys degrade a \
             lookup to O(n) and the whole pass to O(n²)."
        )?;
        writeln!(
            f,
            "   - std::collections::HashMap hashes with SipHash under a per-process \
             random key, so crafted readings cannot force collisions."
        )?;
        match self.hash_table.fitted_exponent {
            Some(exponent) if exponent <= LINEAR_TOLERANCE => writeln!(
                f,
                "   - Observed {} exponent {exponent:.2} stays near linear; collisions \
                 did not dominate.",
                self.hash_table.name
            ),
            Some(exponent) => writeln!(
                f,
                "   - Observed {} exponent {exponent:.2} is above linear; collisions, \
                 rehashing or cache misses are adding cost at the larger sizes.",
                self.hash_table.name
            ),
            None => writeln!(
                f,
                "   - Collision cost cannot be judged without an observed exponent."
            ),
        }
    }

    fn write_practical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "5. PRACTICAL IMPLICATIONS")?;
        if let Some((size, speedup)) = self.best_speedup {
            writeln!(
                f,
                "   - Best speedup: {} at {} readings.",
                speedup,
                size.to_formatted_string(&Locale::en)
            )?;
        }
        if let Some(snapshot) = self.largest_processed {
            let size = snapshot.size.to_formatted_string(&Locale::en);
            for (name, timing) in [
                (self.brute_force.name, snapshot.brute_force),
                (self.hash_table.name, snapshot.hash_table),
            ] {
                match timing {
                    Timing::Measured { mean, .. } if mean < REAL_TIME_BUDGET => writeln!(
                        f,
                        "   - {name} at {size} readings: {:.6} s, fits real-time (sub-second) balancing.",
                        mean.as_secs_f64()
                    )?,
                    Timing::Measured { mean, .. } => writeln!(
                        f,
                        "   - {name} at {size} readings: {:.6} s, too slow for real-time (sub-second) balancing.",
                        mean.as_secs_f64()
                    )?,
                    Timing::TimedOut { limit } => writeln!(
                        f,
                        "   - {name} at {size} readings: exceeded the {limit:?} limit.",
                    )?,
                }
            }
        }
        for trend in [&self.brute_force, &self.hash_table] {
            if !trend.timeouts.is_empty() {
                writeln!(
                    f,
                    "   - {} was not measured at {} readings (time limit).",
                    trend.name,
                    join_sizes(trend.timeouts.iter().map(|(size, _)| *size)),
                )?;
            }
        }
        Ok(())
    }

    fn write_tie_breaking(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "6. TIE-BREAKING")?;
        writeln!(
            f,
            "   - At {} readings the solvers returned different valid pairs. Brute force \
             reports the lexicographically first pair; the hash table reports the pair \
             completed earliest, matched against the latest earlier occurrence of the \
             complement.",
            join_sizes(self.diverging_sizes.iter().copied()),
        )
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No dataset size was processed; there is nothing to analyze.");
        }

        self.write_time_complexity(f)?;
        writeln!(f)?;
        self.write_scalability(f)?;
        writeln!(f)?;
        self.write_memory(f)?;
        writeln!(f)?;
        self.write_hashing(f)?;
        writeln!(f)?;
        self.write_practical(f)?;
        if !self.diverging_sizes.is_empty() {
            writeln!(f)?;
            self.write_tie_breaking(f)?;
        }
        Ok(())
    }
}

/// Distinct pairs a brute-force scan may check: n(n-1)/2.
pub fn pair_count(n: usize) -> u128 {
    let n = n as u128;
    n * n.saturating_sub(1) / 2
}

/// Upper bound on hash-table entry bytes for `n` readings.
pub fn hash_table_bytes(n: usize) -> u128 {
    n as u128 * HASH_ENTRY_BYTES as u128
}

/// Least-squares slope of `y` over `x`.
fn fit_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let count = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / count;

    let (covariance, variance) = points.iter().fold((0.0, 0.0), |(cov, var), (x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });

    (variance > f64::EPSILON).then(|| covariance / variance)
}

fn growth_between(measured: &[&ComparisonRow]) -> Option<Growth> {
    let usable: Vec<(usize, Duration, Duration)> = measured
        .iter()
        .filter_map(|row| {
            let bf = row.brute_force.mean()?;
            let ht = row.hash_table.mean()?;
            (!bf.is_zero() && !ht.is_zero()).then_some((row.dataset_len, bf, ht))
        })
        .collect();

    let first = usable.iter().min_by_key(|(len, _, _)| *len)?;
    let last = usable.iter().max_by_key(|(len, _, _)| *len)?;
    if first.0 == last.0 {
        return None;
    }
    Some(Growth {
        from_size: first.0,
        to_size: last.0,
        brute_force_factor: last.1.as_secs_f64() / first.1.as_secs_f64(),
        hash_table_factor: last.2.as_secs_f64() / first.2.as_secs_f64(),
    })
}

fn join_sizes(sizes: impl Iterator<Item = usize>) -> String {
    sizes
        .map(|size| size.to_formatted_string(&Locale::en))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsum_core::{PairMatch, SolveResult};

    fn measured(micros: u64, outcome: SolveResult) -> Timing {
        Timing::Measured {
            mean: Duration::from_micros(micros),
            outcome,
        }
    }

    fn report(rows: Vec<ComparisonRow>) -> ComparisonReport {
        let mut report = ComparisonReport::new("test", 0);
        report.rows = rows;
        report
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(100_000), 4_999_950_000);
        assert_eq!(hash_table_bytes(1_000), 16_000);
    }

    #[test]
    fn test_fit_slope_recovers_power_law() {
        let quadratic: Vec<(f64, f64)> = [10.0_f64, 100.0, 1000.0]
            .iter()
            .map(|n| (n.ln(), (n * n).ln()))
            .collect();
        let slope = fit_slope(&quadratic).unwrap();
        assert!((slope - 2.0).abs() < 1e-9);

        assert_eq!(fit_slope(&[(1.0, 1.0)]), None);
        assert_eq!(fit_slope(&[(1.0, 1.0), (1.0, 2.0)]), None);
    }

    #[test]
    fn test_from_report() {
        let found = SolveResult::Found(PairMatch::new(0, 2, 3, 1));
        let other = SolveResult::Found(PairMatch::new(1, 2, 3, 1));
        let rows = vec![
            ComparisonRow::new(10, 10, measured(1, found), measured(1, other)),
            ComparisonRow::new(100, 100, measured(100, found), measured(10, found)),
            ComparisonRow::new(1_000, 1_000, measured(10_000, found), measured(100, found)),
        ];

        let analysis = report(rows).analysis();

        let bf = analysis.brute_force.fitted_exponent.unwrap();
        let ht = analysis.hash_table.fitted_exponent.unwrap();
        assert!((bf - 2.0).abs() < 1e-9);
        assert!((ht - 1.0).abs() < 1e-9);
        assert_eq!(analysis.largest_measured, Some(1_000));
        let (best_size, best) = analysis.best_speedup.unwrap();
        assert_eq!(best_size, 1_000);
        assert!((best.value() - 100.0).abs() < 1e-6);
        assert_eq!(analysis.diverging_sizes, vec![10]);

        let growth = analysis.growth.unwrap();
        assert_eq!((growth.from_size, growth.to_size), (10, 1_000));
        assert!((growth.brute_force_factor - 10_000.0).abs() < 1e-6);

        let text = analysis.to_string();
        assert!(text.contains("1. TIME COMPLEXITY"));
        assert!(text.contains("O(n²) expected (exponent 2), observed exponent 2.00"));
        assert!(text.contains("499,500 pairs"));
        assert!(text.contains("16,000 bytes"));
        assert!(text.contains("Best speedup: 100.00x at 1,000 readings"));
        assert!(text.contains("fits real-time (sub-second) balancing"));
        assert!(text.contains("4. HASH COLLISIONS"));
        assert!(text.contains("SipHash"));
        assert!(text.contains("amortized O(1)"));
        assert!(text.contains("Observed Hash Table exponent 1.00 stays near linear"));
        assert!(text.contains("6. TIE-BREAKING"));
        assert!(text.contains("At 10 readings"));
    }

    #[test]
    fn test_sizes_use_loaded_length() {
        let rows = vec![
            ComparisonRow::new(
                100,
                100,
                measured(10, SolveResult::NotFound),
                measured(1, SolveResult::NotFound),
            ),
            ComparisonRow::new(
                1_000,
                900,
                measured(810, SolveResult::NotFound),
                measured(9, SolveResult::NotFound),
            ),
        ];

        let analysis = report(rows).analysis();

        assert_eq!(analysis.largest_measured, Some(900));
        assert_eq!(analysis.largest_processed.unwrap().size, 900);
        let growth = analysis.growth.unwrap();
        assert_eq!((growth.from_size, growth.to_size), (100, 900));
        assert_eq!(analysis.best_speedup.unwrap().0, 900);

        let text = analysis.to_string();
        assert!(text.contains("At 900 readings brute force checks up to 404,550 pairs"));
        assert!(text.contains("14,400 bytes"));
        assert!(!text.contains("1,000 readings"));
    }

    #[test]
    fn test_superlinear_hash_table_flagged() {
        let rows = vec![
            ComparisonRow::new(
                10,
                10,
                measured(1, SolveResult::NotFound),
                measured(1, SolveResult::NotFound),
            ),
            ComparisonRow::new(
                1_000,
                1_000,
                measured(10_000, SolveResult::NotFound),
                measured(10_000, SolveResult::NotFound),
            ),
        ];

        let text = report(rows).analysis().to_string();
        assert!(text.contains("Observed Hash Table exponent 2.00 is above linear"));
    }

    #[test]
    fn test_timeouts_reported() {
        let limit = Duration::from_millis(5);
        let rows = vec![
            ComparisonRow::new(
                10,
                10,
                measured(2, SolveResult::NotFound),
                measured(1, SolveResult::NotFound),
            ),
            ComparisonRow::new(
                1_000,
                1_000,
                Timing::TimedOut { limit },
                measured(20, SolveResult::NotFound),
            ),
        ];

        let analysis = report(rows).analysis();

        assert_eq!(analysis.largest_measured, Some(10));
        assert_eq!(analysis.brute_force.timeouts, vec![(1_000, limit)]);
        assert!(analysis.hash_table.timeouts.is_empty());
        assert_eq!(analysis.growth, None);
        assert!(analysis.diverging_sizes.is_empty());

        let text = analysis.to_string();
        assert!(text.contains("Brute Force at 1,000 readings: exceeded the 5ms limit."));
        assert!(text.contains("Brute Force was not measured at 1,000 readings"));
        assert!(!text.contains("TIE-BREAKING"));
    }

    #[test]
    fn test_empty_report() {
        let analysis = report(Vec::new()).analysis();
        assert!(analysis.is_empty());
        assert_eq!(analysis.best_speedup, None);
        assert!(analysis.to_string().contains("nothing to analyze"));
    }
}
