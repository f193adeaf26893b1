use std::fs::File;
use std::io::{BufWriter, Write};

/// Generates a synthetic delimited dataset for exercising the clustering
/// pipeline: shared column values, exact duplicates, quoted numerals and
/// a sprinkling of malformed lines.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/test_records.txt".to_string());
    let rows: usize = std::env::args()
        .nth(2)
        .and_then(|n| n.parse().ok())
        .unwrap_or(10_000);

    println!("Output: {}", output_file);
    println!("Rows: {}\n", rows);

    let file = File::create(&output_file)?;
    let mut writer = BufWriter::new(file);

    for i in 0..rows {
        match i % 10 {
            // Chains of records sharing column 0
            0..=2 => writeln!(writer, "{};{};{}", i / 10, i, i + rows)?,
            // Quoted variant of a value seen bare elsewhere
            3 => writeln!(writer, "\"{}\";{}", i / 10, i + 2 * rows)?,
            // Exact duplicate of a chain line
            4 => writeln!(writer, "{};{};{}", (i - 4) / 10, i - 4, i - 4 + rows)?,
            // Isolated records
            5..=7 => writeln!(writer, "{};{}", i + 3 * rows, i + 4 * rows)?,
            // Trailing empty field
            8 => writeln!(writer, "{};{};", i + 5 * rows, i + 6 * rows)?,
            // Malformed: non-numeric field, dropped by validation
            _ => writeln!(writer, "{};x{}", i, i)?,
        }
    }

    writer.flush()?;
    println!("✓ Wrote {} rows to {}", rows, output_file);
    println!("\nTry: fieldlink group -i {} -o /tmp/groups.txt", output_file);

    Ok(())
}
