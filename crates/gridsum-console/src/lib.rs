//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats comparison events with
//! colors. Everything goes to stderr so the report on stdout stays clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Comparison and per-size lifecycle (start, end, skipped)
//! - **WARN**: Timeouts and solver disagreements
//! - **DEBUG**: Per-solver timing summaries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gridsum_benchmark=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GridSumConsoleLayer)
            .try_init();
    });
}

// Marks the start of a comparison for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the comparison started.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____      _     _ ____
 / ___|_ __(_) __| / ___| _   _ _ __ ___
| |  _| '__| |/ _` \___ \| | | | '_ ` _ \
| |_| | |  | | (_| |___) | |_| | | | | | |
 \____|_|  |_|\__,_|____/ \__,_|_| |_| |_|
"#;

    let version_line = format!("        v{} - Two-Sum Energy Balancing Benchmark\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct GridSumConsoleLayer;

impl<S: Subscriber> Layer<S> for GridSumConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from the benchmark crate only
        if !metadata.target().starts_with("gridsum_benchmark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    solver: Option<String>,
    source: Option<String>,
    reason: Option<String>,
    brute_force: Option<String>,
    hash_table: Option<String>,
    size: Option<u64>,
    sizes: Option<u64>,
    runs: Option<u64>,
    readings: Option<u64>,
    target_sum: Option<i64>,
    mean_us: Option<u64>,
    brute_force_us: Option<u64>,
    hash_table_us: Option<u64>,
    limit_ms: Option<u64>,
    duration_ms: Option<u64>,
    processed: Option<u64>,
    skipped: Option<u64>,
    speedup: Option<f64>,
    speedup_capped: bool,
    found: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "solver" => self.solver = Some(value),
            "source" => self.source = Some(value),
            "reason" => self.reason = Some(value),
            "brute_force" => self.brute_force = Some(value),
            "hash_table" => self.hash_table = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "sizes" => self.sizes = Some(value),
            "runs" => self.runs = Some(value),
            "readings" => self.readings = Some(value),
            "mean_us" => self.mean_us = Some(value),
            "brute_force_us" => self.brute_force_us = Some(value),
            "hash_table_us" => self.hash_table_us = Some(value),
            "limit_ms" => self.limit_ms = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "processed" => self.processed = Some(value),
            "skipped" => self.skipped = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "target_sum" => self.target_sum = Some(value),
            _ => {
                if let Ok(value) = u64::try_from(value) {
                    self.record_u64(field, value);
                }
            }
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "speedup" {
            self.speedup = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "found" => self.found = Some(value),
            "speedup_capped" => self.speedup_capped = value,
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "comparison_start" => format_comparison_start(v),
        "comparison_end" => format_comparison_end(v),
        "size_start" => format_size_start(v),
        "size_end" => format_size_end(v),
        "size_skipped" => format_size_skipped(v),
        "size_mismatch" => format_size_mismatch(v),
        "status_mismatch" => format_status_mismatch(v),
        "solver_end" => format_solver_end(v),
        "solver_timeout" => format_solver_timeout(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_comparison_start(v: &EventVisitor) -> String {
    mark_run_start();
    format!(
        "{} {} Comparing │ {} sizes │ target {} │ {} runs per solver",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.sizes).bright_yellow(),
        v.target_sum.unwrap_or(0).bright_yellow(),
        format_count(v.runs).bright_yellow(),
    )
}

fn format_comparison_end(v: &EventVisitor) -> String {
    let skipped = v.skipped.unwrap_or(0);
    let skipped_text = if skipped > 0 {
        format!("{} skipped", format_count(v.skipped))
            .bright_red()
            .to_string()
    } else {
        "0 skipped".white().to_string()
    };

    format!(
        "{} {} Comparison complete │ {} │ {} processed │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_count(v.processed).bright_green(),
        skipped_text,
    )
}

fn format_size_start(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ {}",
        format_elapsed(),
        "▶".bright_blue(),
        format_count(v.size).white().bold(),
        v.source.as_deref().unwrap_or("unknown source").bright_black(),
    )
}

fn format_size_end(v: &EventVisitor) -> String {
    let found = match v.found {
        Some(true) => "found".bright_green().to_string(),
        Some(false) => "not found".yellow().to_string(),
        None => "n/a".bright_black().to_string(),
    };

    format!(
        "{} {} n = {} │ brute force {} │ hash table {} │ {} │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        format_count(v.size).white().bold(),
        format_micros(v.brute_force_us).yellow(),
        format_micros(v.hash_table_us).yellow(),
        format_speedup(v.speedup, v.speedup_capped).bright_magenta().bold(),
        found,
    )
}

fn format_size_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} skipped │ {}",
        format_elapsed(),
        "✗".bright_red(),
        format_count(v.size).white().bold(),
        v.reason.as_deref().unwrap_or("unknown error").bright_red(),
    )
}

fn format_size_mismatch(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} holds {} readings",
        format_elapsed(),
        "!".yellow().bold(),
        format_count(v.size).white().bold(),
        format_count(v.readings).yellow(),
    )
}

fn format_status_mismatch(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} solvers disagree │ brute force {} │ hash table {}",
        format_elapsed(),
        "!".bright_red().bold(),
        format_count(v.size).white().bold(),
        v.brute_force.as_deref().unwrap_or("?"),
        v.hash_table.as_deref().unwrap_or("?"),
    )
}

fn format_solver_end(v: &EventVisitor) -> String {
    format!(
        "{}   {} {} │ {} runs │ mean {}",
        format_elapsed(),
        "·".bright_black(),
        v.solver.as_deref().unwrap_or("solver").white(),
        format_count(v.runs),
        format_micros(v.mean_us).yellow(),
    )
}

fn format_solver_timeout(v: &EventVisitor) -> String {
    format!(
        "{} {} {} exceeded {} at n = {}",
        format_elapsed(),
        "⏱".bright_red(),
        v.solver.as_deref().unwrap_or("solver").white().bold(),
        format_duration_ms(v.limit_ms.unwrap_or(0)).bright_red(),
        format_count(v.size),
    )
}

fn format_micros(micros: Option<u64>) -> String {
    match micros {
        None => "timeout".to_string(),
        Some(us) if us < 1_000 => format!("{}µs", us),
        Some(us) => format_duration_ms(us / 1_000),
    }
}

fn format_speedup(speedup: Option<f64>, capped: bool) -> String {
    match speedup {
        Some(ratio) if capped => format!(">{:.2}x", ratio),
        Some(ratio) => format!("{:.2}x", ratio),
        None => "n/a".to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
