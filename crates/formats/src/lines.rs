//! Streaming text line reader
//!
//! Reads delimited text datasets line-by-line with automatic gzip
//! decompression. Lines are delivered verbatim (minus the newline);
//! deciding what to do with them is the consumer's business.

use crate::{Error, Record, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Configuration for the line reader
#[derive(Debug, Clone)]
pub struct LinesConfig {
    /// Buffer size for BufReader
    pub buffer_size: usize,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB buffer
        }
    }
}

/// Streaming line reader over any byte source
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    bytes_read: u64,
    total_bytes: Option<u64>,
}

impl LineReader<Box<dyn Read>> {
    /// Open a text file, auto-detecting gzip compression by extension.
    ///
    /// Decompressed streams report no total size; plain files do.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let total_bytes = file.metadata()?.len();

        let extension = path.extension().and_then(|e| e.to_str());

        match extension {
            Some("gz") => {
                debug!("Opening gzip-compressed text file: {:?}", path);
                let decoder = GzDecoder::new(file);
                let reader: Box<dyn Read> = Box::new(decoder);
                Ok(Self::new_with_config(reader, LinesConfig::default(), None))
            }
            _ => {
                debug!("Opening plain text file: {:?}", path);
                let reader: Box<dyn Read> = Box::new(file);
                Ok(Self::new_with_config(
                    reader,
                    LinesConfig::default(),
                    Some(total_bytes),
                ))
            }
        }
    }
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader from any Read source
    pub fn new(reader: R) -> Self {
        Self::new_with_config(reader, LinesConfig::default(), None)
    }

    /// Create a new line reader with custom configuration
    pub fn new_with_config(reader: R, config: LinesConfig, total_bytes: Option<u64>) -> Self {
        let buf_reader = BufReader::with_capacity(config.buffer_size, reader);
        Self {
            reader: buf_reader,
            line_number: 0,
            bytes_read: 0,
            total_bytes,
        }
    }

    /// Get the number of lines read
    pub fn lines_processed(&self) -> usize {
        self.line_number
    }

    /// Get the number of bytes read
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Get total file size if known
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        match self.reader.read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(n) => {
                self.bytes_read += n as u64;
                self.line_number += 1;

                // Strip the line terminator, keep everything else verbatim
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }

                Some(Ok(Record::new(line, self.line_number)))
            }
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}
