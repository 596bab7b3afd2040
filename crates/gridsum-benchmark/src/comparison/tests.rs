//! Tests for the comparison builder.

use std::cell::RefCell;

use super::*;
use gridsum_core::SyntheticSource;
use gridsum_test::{datasets, DataDir};

/// Source that records which sizes were requested.
#[derive(Debug, Default)]
struct RecordingSource {
    requested: RefCell<Vec<usize>>,
}

impl DatasetSource for RecordingSource {
    fn load(&self, size: usize) -> Result<Dataset> {
        self.requested.borrow_mut().push(size);
        Ok(datasets::worst_case(size))
    }

    fn describe(&self, size: usize) -> String {
        format!("recording(n={size})")
    }
}

fn config() -> BenchmarkConfig {
    BenchmarkConfig::new("test").with_run_count(2)
}

#[test]
fn test_sizes_processed_ascending_without_duplicates() {
    let source = RecordingSource::default();
    let comparison = Comparison::new(config(), &source);

    let report = comparison.run(&[100, 10, 50, 10], 0).unwrap();

    assert_eq!(*source.requested.borrow(), vec![10, 50, 100]);
    let sizes: Vec<usize> = report.rows.iter().map(|row| row.size).collect();
    assert_eq!(sizes, vec![10, 50, 100]);
    assert_eq!(report.processed_count(), 3);
}

#[test]
fn test_invalid_configuration_fails_before_loading() {
    let source = RecordingSource::default();

    let zero_runs = Comparison::new(config().with_run_count(0), &source);
    assert!(matches!(
        zero_runs.run(&[10], 0),
        Err(GridSumError::InvalidConfiguration(_))
    ));

    let comparison = Comparison::new(config(), &source);
    assert!(matches!(
        comparison.run(&[], 0),
        Err(GridSumError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        comparison.run(&[10, 0], 0),
        Err(GridSumError::InvalidConfiguration(_))
    ));

    assert!(source.requested.borrow().is_empty());
}

#[test]
fn test_missing_file_is_skipped() {
    let data = DataDir::new().with_dataset(&datasets::worst_case(10));
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[10, 100], 0).unwrap();

    assert_eq!(report.processed_count(), 1);
    assert_eq!(report.rows[0].size, 10);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].size, 100);
    assert_eq!(report.skipped[0].kind, "data_source");
}

#[test]
fn test_malformed_file_is_skipped() {
    let data = DataDir::new()
        .with_dataset(&datasets::worst_case(10))
        .with_raw(20, "Value\n1\nnot-a-number\n");
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[10, 20], 0).unwrap();

    assert_eq!(report.processed_count(), 1);
    assert_eq!(report.skipped[0].size, 20);
    assert_eq!(report.skipped[0].kind, "data_format");
    assert!(report.skipped[0].reason.contains("not-a-number"));
}

#[test]
fn test_all_sizes_missing() {
    let data = DataDir::new();
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[10, 100], 0).unwrap();

    assert_eq!(report.processed_count(), 0);
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn test_classic_row() {
    let fixture = datasets::classic();
    let data = DataDir::new().with_dataset(&fixture.dataset);
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[4], fixture.target).unwrap();
    let row = &report.rows[0];

    assert_eq!(row.found, Some(true));
    assert!(row.speedup.is_some());
    assert_eq!(row.brute_force_pair().map(|p| p.values()), Some((2, 7)));
    assert_eq!(row.brute_force_pair(), row.hash_table_pair());
    assert!(!row.pairs_differ());
    assert!(!row.status_mismatch());
}

#[test]
fn test_not_found_row() {
    let fixture = datasets::surplus_regression();
    let data = DataDir::new().with_dataset(&fixture.dataset);
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[5], fixture.target).unwrap();

    assert_eq!(report.rows[0].found, Some(false));
    assert_eq!(report.rows[0].brute_force_pair(), None);
}

#[test]
fn test_duplicate_readings_yield_different_pairs() {
    let fixture = datasets::duplicates();
    let data = DataDir::new().with_dataset(&fixture.dataset);
    let comparison = Comparison::new(config(), data.source());

    let report = comparison.run(&[4], fixture.target).unwrap();
    let row = &report.rows[0];

    assert_eq!(row.brute_force_pair().map(|p| p.indices()), Some((0, 2)));
    assert_eq!(row.hash_table_pair().map(|p| p.indices()), Some((1, 2)));
    assert!(row.pairs_differ());
    assert_eq!(row.found, Some(true));
}

#[test]
fn test_timeout_marks_row_unmeasured() {
    let comparison = Comparison::new(
        config().with_time_limit(Duration::ZERO),
        RecordingSource::default(),
    );

    let report = comparison.run(&[10], 0).unwrap();
    let row = &report.rows[0];

    assert_eq!(report.processed_count(), 1);
    assert_eq!(row.brute_force, Timing::TimedOut { limit: Duration::ZERO });
    assert_eq!(row.hash_table, Timing::TimedOut { limit: Duration::ZERO });
    assert_eq!(row.speedup, None);
    assert_eq!(row.found, None);
    assert!(!row.is_fully_measured());
    assert_eq!(report.measured_rows().count(), 0);
}

#[test]
fn test_synthetic_source_range_error_is_fatal() {
    let comparison = Comparison::new(config(), SyntheticSource::new(1).with_range(5, -5));
    assert!(matches!(
        comparison.run(&[10], 0),
        Err(GridSumError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_speedup_guard() {
    let secs = Duration::from_secs;

    assert_eq!(Speedup::between(secs(5), secs(2)), Speedup::Ratio(2.5));
    assert_eq!(Speedup::between(secs(5), Duration::ZERO), Speedup::Capped);
    assert_eq!(
        Speedup::between(Duration::from_secs(2_000), Duration::from_nanos(1)),
        Speedup::Capped
    );
    assert_eq!(Speedup::between(Duration::ZERO, secs(1)), Speedup::Ratio(0.0));
    assert_eq!(Speedup::Capped.value(), SPEEDUP_CAP);
    assert_eq!(Speedup::Ratio(0.5).to_string(), "0.50x");
}

#[test]
fn test_found_flag_uses_measured_solver() {
    let found = SolveResult::Found(PairMatch::new(0, 1, 2, 7));
    let row = ComparisonRow::new(
        4,
        4,
        Timing::TimedOut {
            limit: Duration::from_millis(1),
        },
        Timing::Measured {
            mean: Duration::from_micros(2),
            outcome: found,
        },
    );

    assert_eq!(row.found, Some(true));
    assert_eq!(row.speedup, None);
    assert!(!row.pairs_differ());
}

/// Brute-force mean time grows faster than linearly across sizes 10x apart.
///
/// Timing-sensitive, so it is opt-in.
#[test]
#[ignore]
fn test_brute_force_grows_superlinearly() {
    let comparison = Comparison::new(
        BenchmarkConfig::new("growth").with_warmup_count(1).with_run_count(3),
        RecordingSource::default(),
    );

    let report = comparison.run(&[200, 2_000, 20_000], 0).unwrap();
    let means: Vec<f64> = report
        .rows
        .iter()
        .filter_map(|row| row.brute_force.mean())
        .map(|mean| mean.as_secs_f64())
        .collect();

    assert_eq!(means.len(), 3);
    assert!(means[2] / means[1] > 10.0);
    assert!(means[1] > means[0]);
}
