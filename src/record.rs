//! BED record model and tab-field scanning.

use memchr::memchr;

/// A surviving input line with its parsed sort key.
///
/// `raw` is the line exactly as read, terminator included. Output is
/// `raw` verbatim; the parsed fields exist only for filtering and
/// ordering, never for reformatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Chromosome name (first field).
    pub chrom: String,
    /// Start coordinate (second field).
    pub start: i64,
    /// End coordinate (third field).
    pub end: i64,
    /// Original line text, unmodified.
    pub raw: String,
}

impl Record {
    pub fn new(chrom: impl Into<String>, start: i64, end: i64, raw: impl Into<String>) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            raw: raw.into(),
        }
    }

    /// Composite sort key: start primary, end secondary.
    #[inline]
    pub fn sort_key(&self) -> (i64, i64) {
        (self.start, self.end)
    }
}

/// Slice out the first three tab-delimited fields of a trimmed line.
///
/// Returns `None` if the line has fewer than three fields. Columns past
/// the third are left untouched inside the line; callers that need them
/// keep the whole line around anyway.
///
/// Uses memchr for tab searching, avoiding a full split into a Vec.
#[inline]
pub fn bed3_fields(line: &str) -> Option<(&str, &str, &str)> {
    let bytes = line.as_bytes();
    let tab1 = memchr(b'\t', bytes)?;
    let tab2 = memchr(b'\t', &bytes[tab1 + 1..])? + tab1 + 1;
    let end = memchr(b'\t', &bytes[tab2 + 1..])
        .map(|i| tab2 + 1 + i)
        .unwrap_or(bytes.len());

    Some((&line[..tab1], &line[tab1 + 1..tab2], &line[tab2 + 1..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed3_fields() {
        let (chrom, start, end) = bed3_fields("chr1\t100\t200").unwrap();
        assert_eq!(chrom, "chr1");
        assert_eq!(start, "100");
        assert_eq!(end, "200");
    }

    #[test]
    fn test_bed3_fields_extra_columns() {
        let (chrom, start, end) = bed3_fields("chr1\t100\t200\tname\t0\t+").unwrap();
        assert_eq!(chrom, "chr1");
        assert_eq!(start, "100");
        assert_eq!(end, "200");
    }

    #[test]
    fn test_bed3_fields_too_few() {
        assert!(bed3_fields("chr1\t100").is_none());
        assert!(bed3_fields("chr1").is_none());
        assert!(bed3_fields("").is_none());
    }

    #[test]
    fn test_bed3_fields_empty_fields() {
        // Structural check only: empty fields still count as fields.
        let (chrom, start, end) = bed3_fields("\t\t").unwrap();
        assert_eq!(chrom, "");
        assert_eq!(start, "");
        assert_eq!(end, "");
    }

    #[test]
    fn test_sort_key() {
        let r = Record::new("chr1", 100, 200, "chr1\t100\t200\n");
        assert_eq!(r.sort_key(), (100, 200));
    }
}
