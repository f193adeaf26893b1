use fieldlink_core::{ClusterEngine, Deduplicator, GroupReport};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Minimal library-level run: read a delimited file, cluster it, print
/// the report to stdout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔗 fieldlink\n");

    let input_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/test_records.txt".to_string());

    println!("Input: {}\n", input_file);

    let file = File::open(&input_file)?;
    let reader = BufReader::new(file);

    let mut dedup = Deduplicator::new();
    for line in reader.lines() {
        dedup.push(&line?);
    }

    let stats = dedup.stats().clone();
    println!(
        "Read {} lines: {} unique, {} duplicates, {} invalid\n",
        stats.total_seen, stats.unique, stats.duplicates, stats.invalid
    );

    let mut engine = ClusterEngine::new();
    let components = engine.cluster(dedup.into_lines());
    let report = GroupReport::from_components(components);

    report.write_to(&mut std::io::stdout())?;

    Ok(())
}
