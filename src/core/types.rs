//! Core data types for ignorescan

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One filesystem node visited during a walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Bare file or directory name
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl Entry {
    /// Create a new entry
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_dir,
        }
    }

    /// Create a file entry
    pub fn file(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::new(path, name, false)
    }

    /// Create a directory entry
    pub fn dir(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::new(path, name, true)
    }
}

/// Per-directory decision returned to the traversal driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    /// Visit the directory's children
    Descend,
    /// Prune the entire subtree
    Skip,
}

/// Deduplicated, order-preserving collection of accepted relative paths
///
/// Paths are relative to the scan base directory, in forward-slash form.
/// Insertion order is discovery order; re-inserting an existing path is a
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeSet {
    paths: IndexSet<String>,
}

impl IncludeSet {
    /// Create an empty include set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relative path if not already present
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Check whether a path is already recorded
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of recorded paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate paths in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Consume the set, yielding paths in discovery order
    pub fn into_vec(self) -> Vec<String> {
        self.paths.into_iter().collect()
    }
}

impl FromIterator<String> for IncludeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
