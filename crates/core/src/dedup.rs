//! Order-preserving deduplication of raw input lines
//!
//! Lines are validated first, then collapsed by exact string equality.
//! First-seen order is preserved: it fixes the record indices used by the
//! clustering engine and the tie-breaks of the final report ordering.

use ahash::AHashSet;
use tracing::debug;

use crate::validate::is_valid_line;

/// Statistics for a deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupStats {
    /// Total number of lines seen
    pub total_seen: usize,
    /// Lines rejected by validation
    pub invalid: usize,
    /// Valid lines dropped as exact duplicates
    pub duplicates: usize,
    /// Valid, unique lines retained
    pub unique: usize,
}

impl DedupStats {
    /// Duplicates as a percentage of all lines seen
    pub fn dedup_rate(&self) -> f64 {
        if self.total_seen == 0 {
            0.0
        } else {
            (self.duplicates as f64 / self.total_seen as f64) * 100.0
        }
    }

    /// Invalid lines as a percentage of all lines seen
    pub fn invalid_rate(&self) -> f64 {
        if self.total_seen == 0 {
            0.0
        } else {
            (self.invalid as f64 / self.total_seen as f64) * 100.0
        }
    }
}

/// Collects valid lines in first-seen order, dropping exact duplicates
pub struct Deduplicator {
    seen: AHashSet<String>,
    lines: Vec<String>,
    stats: DedupStats,
}

impl Deduplicator {
    /// Create an empty deduplicator
    pub fn new() -> Self {
        Self {
            seen: AHashSet::new(),
            lines: Vec::new(),
            stats: DedupStats::default(),
        }
    }

    /// Create a deduplicator sized for an expected number of unique lines
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: AHashSet::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
            stats: DedupStats::default(),
        }
    }

    /// Offer a raw line. Returns true if the line was retained.
    pub fn push(&mut self, line: &str) -> bool {
        self.stats.total_seen += 1;

        if !is_valid_line(line) {
            self.stats.invalid += 1;
            debug!("Dropping malformed line {}: {:?}", self.stats.total_seen, line);
            return false;
        }

        if self.seen.contains(line) {
            self.stats.duplicates += 1;
            return false;
        }

        self.seen.insert(line.to_string());
        self.lines.push(line.to_string());
        self.stats.unique += 1;
        true
    }

    /// Number of unique lines retained so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been retained
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current statistics
    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }

    /// Consume the deduplicator, returning retained lines in first-seen order
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}
