//! Unified line source abstraction
//!
//! Provides the seam between dataset files on disk and the consumers of
//! their raw lines, with progress accounting for reporting layers.

use crate::{lines::LineReader, Record, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Trait for line sources providing a unified interface
pub trait LineSource: Iterator<Item = Result<Record>> {
    /// Get total file size in bytes if known
    fn total_bytes(&self) -> Option<u64>;

    /// Get number of bytes processed so far
    fn bytes_processed(&self) -> u64;

    /// Get the number of lines processed
    fn lines_processed(&self) -> usize;
}

/// Text file line source, plain or gzip-compressed
pub struct TextLineSource {
    reader: LineReader<Box<dyn Read>>,
}

impl Iterator for TextLineSource {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next()
    }
}

impl LineSource for TextLineSource {
    fn total_bytes(&self) -> Option<u64> {
        self.reader.total_bytes()
    }

    fn bytes_processed(&self) -> u64 {
        self.reader.bytes_processed()
    }

    fn lines_processed(&self) -> usize {
        self.reader.lines_processed()
    }
}

/// Factory function to open a dataset as a line source.
///
/// A `.gz` extension selects gzip decompression; any other path is read
/// as plain text.
pub fn open_lines<P: AsRef<Path>>(path: P) -> Result<Box<dyn LineSource>> {
    let path = path.as_ref();
    info!("Opening dataset: {:?}", path);

    let reader = LineReader::open(path)?;
    Ok(Box::new(TextLineSource { reader }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_plain_dataset() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "1;2").unwrap();
        writeln!(temp_file, "3;4").unwrap();
        temp_file.flush().unwrap();

        let mut source = open_lines(temp_file.path()).unwrap();
        let records: Vec<_> = source.by_ref().collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "1;2");
    }

    #[test]
    fn test_line_source_progress() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "1;2").unwrap();
        writeln!(temp_file, "3;4").unwrap();
        temp_file.flush().unwrap();

        let mut source = open_lines(temp_file.path()).unwrap();

        assert_eq!(source.lines_processed(), 0);
        assert!(source.total_bytes().is_some());

        let _ = source.next();
        assert_eq!(source.lines_processed(), 1);
        assert!(source.bytes_processed() > 0);
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_lines("/nonexistent/dataset.txt");
        assert!(result.is_err());
    }
}
