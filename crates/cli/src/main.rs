//! fieldlink CLI
//!
//! Groups records of delimited numeric datasets by shared field values

mod config;
mod progress;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fieldlink_core::{is_valid_line, ClusterEngine, Deduplicator, GroupReport, DELIMITER};
use fieldlink_formats::open_lines;
use progress::ProgressReporter;

#[derive(Parser)]
#[command(name = "fieldlink")]
#[command(version, about = "Group delimited records by shared field values", long_about = None)]
#[command(author = "fieldlink")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output statistics in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster records sharing field values into groups
    Group {
        /// Input file (plain text or gzip)
        #[arg(short, long)]
        input: PathBuf,

        /// Output report file
        #[arg(short, long)]
        output: PathBuf,

        /// Show statistics without writing the report
        #[arg(long)]
        dry_run: bool,

        /// Only show statistics, don't write anything
        #[arg(long)]
        stats_only: bool,
    },

    /// Run a clustering job described by a config file
    Pipeline {
        /// Job config file (YAML or TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Show statistics without writing the report
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect the first lines of a dataset
    Inspect {
        /// Path to the dataset file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of lines to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Count lines in a dataset
    Count {
        /// Path to the dataset file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json) // Disable colors if JSON output
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Group {
            input,
            output,
            dry_run,
            stats_only,
        } => {
            run_group(input, output, dry_run, stats_only, cli.json).await?;
        }
        Commands::Pipeline { config, dry_run } => {
            run_pipeline(config, dry_run, cli.json).await?;
        }
        Commands::Inspect { input, limit } => {
            inspect_dataset(input, limit).await?;
        }
        Commands::Count { input } => {
            count_dataset(input).await?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

async fn run_group(
    input: PathBuf,
    output: PathBuf,
    dry_run: bool,
    stats_only: bool,
    json_output: bool,
) -> Result<()> {
    info!("Starting record clustering");
    info!("  Input: {:?}", input);
    if !stats_only {
        info!("  Output: {:?}", output);
    }

    let start = Instant::now();
    let mut reader = open_lines(&input)?;
    let mut dedup = Deduplicator::new();

    let total_bytes = reader.total_bytes().unwrap_or(0);
    let progress = ProgressReporter::new(total_bytes);

    let mut total = 0;
    while let Some(result) = reader.next() {
        let record = result?;
        total += 1;

        dedup.push(&record.text);

        if total % 1000 == 0 {
            let stats = dedup.stats();
            progress.update(
                reader.bytes_processed(),
                total,
                stats.invalid,
                stats.duplicates,
            );
        }
    }

    progress.finish();

    let dedup_stats = dedup.stats().clone();

    if dedup.is_empty() {
        info!("No valid records found to process");
        if json_output {
            let summary = serde_json::json!({
                "input": input.to_string_lossy().to_string(),
                "output": serde_json::Value::Null,
                "total_lines": dedup_stats.total_seen,
                "invalid_lines": dedup_stats.invalid,
                "duplicates_removed": dedup_stats.duplicates,
                "unique_records": 0,
                "groups": 0,
                "largest_group": 0,
                "elapsed_ms": start.elapsed().as_millis() as u64,
                "dry_run": dry_run,
                "stats_only": stats_only,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("No valid records found to process");
        }
        return Ok(());
    }

    let mut engine = ClusterEngine::new();
    let components = engine.cluster(dedup.into_lines());
    let report = GroupReport::from_components(components);

    let write_output = !dry_run && !stats_only;
    if write_output {
        let mut writer = BufWriter::new(File::create(&output)?);
        report.write_to(&mut writer)?;
        writer.flush()?;
        info!("Report written to {:?}", output);
    }

    let elapsed = start.elapsed();

    if json_output {
        let summary = serde_json::json!({
            "input": input.to_string_lossy().to_string(),
            "output": if write_output { serde_json::Value::String(output.to_string_lossy().to_string()) } else { serde_json::Value::Null },
            "total_lines": dedup_stats.total_seen,
            "invalid_lines": dedup_stats.invalid,
            "duplicates_removed": dedup_stats.duplicates,
            "unique_records": dedup_stats.unique,
            "groups": report.len(),
            "largest_group": report.largest_group(),
            "elapsed_ms": elapsed.as_millis() as u64,
            "dry_run": dry_run,
            "stats_only": stats_only,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        progress::print_summary_report(
            &input,
            if write_output { Some(&output) } else { None },
            &dedup_stats,
            report.len(),
            report.largest_group(),
            elapsed,
        );
    }

    Ok(())
}

async fn run_pipeline(config_path: PathBuf, dry_run: bool, json_output: bool) -> Result<()> {
    info!("Running clustering pipeline");
    info!("  Config: {:?}", config_path);

    let cfg = config::PipelineConfig::load(&config_path)?;

    run_group(
        PathBuf::from(cfg.input.path),
        PathBuf::from(cfg.output.path),
        dry_run,
        false,
        json_output,
    )
    .await
}

async fn inspect_dataset(input: PathBuf, limit: usize) -> Result<()> {
    info!("Inspecting dataset: {:?}", input);

    let mut reader = open_lines(&input)?;
    let mut count = 0;

    while let Some(result) = reader.next() {
        let record = result?;
        let fields: Vec<&str> = record.text.split(DELIMITER).collect();
        let verdict = if is_valid_line(&record.text) {
            "valid"
        } else {
            "invalid"
        };

        println!(
            "Line #{} [{}] {} fields: {:?}",
            record.source_line,
            verdict,
            fields.len(),
            fields
        );

        count += 1;
        if count >= limit {
            break;
        }
    }

    info!(
        "Processed {} lines ({} bytes)",
        reader.lines_processed(),
        reader.bytes_processed()
    );

    Ok(())
}

async fn count_dataset(input: PathBuf) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};

    info!("Counting lines in: {:?}", input);

    let mut reader = open_lines(&input)?;

    let pb = if let Some(total) = reader.total_bytes() {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut total = 0;
    let mut valid = 0;
    while let Some(result) = reader.next() {
        let record = result?;
        total += 1;
        if is_valid_line(&record.text) {
            valid += 1;
        }

        if let Some(ref pb) = pb {
            pb.set_position(reader.bytes_processed());
        }

        if total % 10000 == 0 {
            info!("Processed {} lines...", total);
        }
    }

    if let Some(pb) = pb {
        pb.finish();
    }

    println!("Total lines: {}", total);
    println!("Valid lines: {}", valid);
    info!("Processed {} bytes", reader.bytes_processed());

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
