//! Progress reporting and visualization for CLI

use std::path::Path;
use std::time::{Duration, Instant};

use fieldlink_core::DedupStats;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress reporter with a bytes bar and a live stats line
pub struct ProgressReporter {
    _multi: MultiProgress,
    main_bar: ProgressBar,
    stats_bar: ProgressBar,
    _start_time: Instant,
}

impl ProgressReporter {
    /// Create a new progress reporter tracking bytes
    pub fn new(total_bytes: u64) -> Self {
        let multi = MultiProgress::new();

        // Main progress bar for bytes processed
        let main_bar = multi.add(ProgressBar::new(total_bytes));
        main_bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
                .unwrap()
                .progress_chars("█▓▒░-"),
        );

        // Stats bar for invalid/duplicate counts
        let stats_bar = multi.add(ProgressBar::new(0));
        stats_bar.set_style(
            ProgressStyle::default_bar()
                .template("Stats: {msg}")
                .unwrap(),
        );

        Self {
            _multi: multi,
            main_bar,
            stats_bar,
            _start_time: Instant::now(),
        }
    }

    /// Update progress with current statistics
    pub fn update(&self, bytes: u64, total: usize, invalid: usize, duplicates: usize) {
        self.main_bar.set_position(bytes);
        self.main_bar.set_message("Processing...");

        let stats_msg = if invalid > 0 && duplicates > 0 {
            format!(
                "{} total | {} invalid ({:.1}%) | {} duplicates ({:.1}%)",
                Self::format_number(total),
                Self::format_number(invalid),
                (invalid as f64 / total as f64) * 100.0,
                Self::format_number(duplicates),
                (duplicates as f64 / total as f64) * 100.0
            )
        } else if invalid > 0 {
            format!(
                "{} total | {} invalid ({:.1}%)",
                Self::format_number(total),
                Self::format_number(invalid),
                (invalid as f64 / total as f64) * 100.0
            )
        } else if duplicates > 0 {
            format!(
                "{} total | {} duplicates ({:.1}%)",
                Self::format_number(total),
                Self::format_number(duplicates),
                (duplicates as f64 / total as f64) * 100.0
            )
        } else {
            format!("{} total", Self::format_number(total))
        };

        self.stats_bar.set_message(stats_msg);
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        self.main_bar.finish_with_message("Complete!");
        self.stats_bar.finish();
    }

    /// Format large numbers with thousand separators
    fn format_number(n: usize) -> String {
        if n >= 1_000_000 {
            format!("{:.1}M", n as f64 / 1_000_000.0)
        } else if n >= 1_000 {
            format!("{:.1}K", n as f64 / 1_000.0)
        } else {
            n.to_string()
        }
    }
}

/// Print a formatted summary report
pub fn print_summary_report(
    input: &Path,
    output: Option<&Path>,
    stats: &DedupStats,
    groups: usize,
    largest_group: usize,
    elapsed: Duration,
) {
    println!("\n{}", "═".repeat(60));
    println!("Record Clustering Complete");
    println!("{}", "═".repeat(60));
    println!("Input:              {}", input.display());

    if let Some(output_path) = output {
        println!("Output:             {}", output_path.display());
    } else {
        println!("Output:             (dry run - no report written)");
    }

    println!("Total lines:        {}", format_with_commas(stats.total_seen));

    if stats.invalid > 0 {
        println!(
            "Invalid dropped:    {} ({:.1}%)",
            format_with_commas(stats.invalid),
            stats.invalid_rate()
        );
    }

    if stats.duplicates > 0 {
        println!(
            "Duplicates removed: {} ({:.1}%)",
            format_with_commas(stats.duplicates),
            stats.dedup_rate()
        );
    }

    println!("Unique records:     {}", format_with_commas(stats.unique));
    println!("Groups (>1 member): {}", format_with_commas(groups));

    if largest_group > 0 {
        println!("Largest group:      {}", format_with_commas(largest_group));
    }

    println!("Elapsed:            {} ms", elapsed.as_millis());
    println!("{}", "═".repeat(60));
}

/// Format number with thousand separators
fn format_with_commas(n: usize) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>()
        .unwrap()
        .join(",")
}
