//! Ignore-file pattern engine and filtered tree walk
//!
//! This module turns raw dockerignore-style lines into compiled path
//! matchers and walks a directory tree with them, deciding per entry whether
//! it is excluded, included, or (for directories) pruned from traversal.
//! Inversion (`!pattern`) and transitive-directory handling are supported;
//! a small set of built-in default names is always excluded.

pub mod pattern;
pub mod set;
pub mod walker;

// Re-export commonly used items
pub use pattern::{normalize_line, normalize_lines, CompiledPattern, RawPattern};
pub use set::{PatternSet, DEFAULT_PATTERNS};
pub use walker::{EntryProvider, FsEntryProvider, IgnoreWalker};
