//! Bucket sort-and-reorder: the core two-phase algorithm.
//!
//! Phase one (`ingest`) streams raw lines, drops anything that fails the
//! structural checks or whose chromosome is not in the rulebook, and
//! accumulates survivors into per-chromosome buckets in arrival order.
//! Phase two (`emit`) walks the rulebook order, stably sorts each bucket
//! by `(start, end)`, and writes the surviving lines back out verbatim.
//!
//! Emit must not start before ingest finishes: the final order of a
//! bucket depends on every record in it.

use std::fmt;
use std::io::{BufRead, Write};

use rustc_hash::FxHashMap;

use crate::record::{bed3_fields, Record};
use crate::rulebook::{Result, Rulebook};

/// Counters from one ingest pass.
#[derive(Debug, Default, Clone)]
pub struct ShelfStats {
    /// Total input lines seen.
    pub lines_read: usize,
    /// Lines kept as records.
    pub records_kept: usize,
    /// Lines dropped because the chromosome is not in the rulebook.
    pub filtered_out: usize,
    /// Blank, comment, and malformed lines.
    pub skipped: usize,
}

impl fmt::Display for ShelfStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {}, Kept: {}, Filtered: {}, Skipped: {}",
            self.lines_read, self.records_kept, self.filtered_out, self.skipped
        )
    }
}

/// Two-phase bucket sorter driven by a [`Rulebook`].
pub struct BucketSorter<'a> {
    rulebook: &'a Rulebook,
    buckets: FxHashMap<String, Vec<Record>>,
    stats: ShelfStats,
}

impl<'a> BucketSorter<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self {
            rulebook,
            buckets: FxHashMap::default(),
            stats: ShelfStats::default(),
        }
    }

    /// Ingest one raw input line.
    ///
    /// `raw` is retained verbatim (terminator included) if the line
    /// survives; parsing works on a trailing-trimmed view. Drops are
    /// silent: malformed data is a routine filtering outcome here, not
    /// an error.
    pub fn ingest_line(&mut self, raw: &str) {
        self.stats.lines_read += 1;

        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            self.stats.skipped += 1;
            return;
        }

        let (chrom, start, end) = match bed3_fields(line) {
            Some(fields) => fields,
            None => {
                self.stats.skipped += 1;
                return;
            }
        };

        // Membership test before coordinate parsing: lines outside the
        // rulebook never allocate.
        if !self.rulebook.contains(chrom) {
            self.stats.filtered_out += 1;
            return;
        }

        if let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) {
            self.stats.records_kept += 1;
            self.buckets
                .entry(chrom.to_string())
                .or_default()
                .push(Record::new(chrom, start, end, raw));
        } else {
            self.stats.skipped += 1;
        }
    }

    /// Ingest every line from a reader, terminators preserved.
    pub fn ingest<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = String::with_capacity(1024);
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Ok(());
            }
            self.ingest_line(&buf);
        }
    }

    /// Write all surviving lines, grouped in rulebook order and stably
    /// sorted by `(start, end)` within each group.
    ///
    /// Chromosomes with no surviving records produce nothing. The lookup
    /// is defensive: a bucket key missing from the rulebook order (which
    /// ingest rules out) would simply never be visited.
    pub fn emit<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        let rulebook = self.rulebook;
        for chrom in rulebook.keys() {
            if let Some(entries) = self.buckets.get_mut(chrom) {
                entries.sort_by_key(Record::sort_key);
                for record in entries.iter() {
                    writer.write_all(record.raw.as_bytes())?;
                }
            }
        }
        Ok(())
    }

    /// Full pass: ingest the reader, then emit to the writer.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        self.ingest(reader)?;
        self.emit(writer)
    }

    /// Consume the sorter and return the records in emit order.
    pub fn into_records(mut self) -> Vec<Record> {
        let mut out = Vec::new();
        for chrom in self.rulebook.keys() {
            if let Some(mut entries) = self.buckets.remove(chrom) {
                entries.sort_by_key(Record::sort_key);
                out.append(&mut entries);
            }
        }
        out
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &ShelfStats {
        &self.stats
    }
}
