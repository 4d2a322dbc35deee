//! Rulebook parser: the external chromosome ordering list.
//!
//! A rulebook is a plain-text file with one chromosome name per line
//! (conventionally `standard_selection.tsv`). It controls both which
//! records survive filtering and the order output groups appear in.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors that can occur while running bedshelf.
#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Rulebook '{}' not found", .0.display())]
    RulebookNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

/// Ordered allow-list of chromosome names.
///
/// `order` preserves first-appearance order from the rulebook file and
/// drives output grouping; `allowed` backs the O(1) membership test used
/// during filtering. The two always hold the same set of names.
#[derive(Debug, Clone, Default)]
pub struct Rulebook {
    order: Vec<String>,
    allowed: FxHashSet<String>,
}

impl Rulebook {
    /// Create an empty rulebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a rulebook from a file, one name per line.
    ///
    /// Leading/trailing whitespace is stripped from each line and lines
    /// that are empty after stripping are ignored. There is no comment
    /// syntax: any non-empty token is accepted as a valid name. Duplicate
    /// names keep the position of their first occurrence.
    ///
    /// A missing or unreadable file is fatal: no partial rulebook is
    /// usable, so the error propagates to the caller.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|_| ShelfError::RulebookNotFound(path.to_path_buf()))?;
        let reader = BufReader::new(file);

        let mut rulebook = Self::new();
        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if !name.is_empty() {
                rulebook.insert(name.to_string());
            }
        }

        Ok(rulebook)
    }

    /// Append a name (no-op if already present).
    pub fn insert(&mut self, name: String) {
        if self.allowed.insert(name.clone()) {
            self.order.push(name);
        }
    }

    /// Check whether a name is in the allow-list.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    /// All names in rulebook order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
