//! bedshelf: rulebook-driven BED record filtering and reordering.
//!
//! Reads BED-format lines, keeps only those whose chromosome appears in an
//! externally supplied ordering list (the "rulebook"), and emits survivors
//! grouped in rulebook order, stably sorted by `(start, end)` within each
//! group. Surviving lines are written back byte-for-byte.
//!
//! # Example
//!
//! ```rust
//! use bedshelf::{BucketSorter, Rulebook};
//!
//! let mut rulebook = Rulebook::new();
//! rulebook.insert("chr2".to_string());
//! rulebook.insert("chr1".to_string());
//!
//! let input = "chr1\t100\t200\nchr2\t50\t80\n";
//! let mut sorter = BucketSorter::new(&rulebook);
//! let mut output = Vec::new();
//! sorter.run(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(output, b"chr2\t50\t80\nchr1\t100\t200\n");
//! ```

pub mod record;
pub mod rulebook;
pub mod sorter;

pub use record::Record;
pub use rulebook::{Rulebook, ShelfError};
pub use sorter::{BucketSorter, ShelfStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let mut rulebook = Rulebook::new();
        rulebook.insert("chr2".to_string());
        rulebook.insert("chr1".to_string());

        let input = "chr1\t100\t200\tA\nchr2\t50\t80\tB\nchrX\t5\t9\tD\n";
        let mut sorter = BucketSorter::new(&rulebook);
        let mut output = Vec::new();
        sorter.run(input.as_bytes(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "chr2\t50\t80\tB\nchr1\t100\t200\tA\n"
        );
        assert_eq!(sorter.stats().filtered_out, 1);
    }
}
