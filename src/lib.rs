//! ignorescan - Directory scanning with dockerignore-style filtering
//!
//! ignorescan determines which files and directories under a root path are
//! included (not ignored) according to an ignore file in the style of
//! dockerignore/gitignore. It is built for build and packaging tools that
//! need the authoritative file set a container or archive build would
//! consider.
//!
//! # Core Features
//!
//! - **Ordered pattern evaluation**: defaults first, then file patterns in
//!   file order, so later inversions override earlier exclusions
//! - **Inversion patterns**: `!pattern` re-includes an otherwise-excluded
//!   path
//! - **Transitive directories**: an excluded directory is still traversed
//!   when an inversion beneath it needs evaluation
//! - **Subtree pruning**: excluded directories without a pending inversion
//!   are never descended into
//! - **Built-in defaults**: `.git`, `vendor` and `node_modules` are always
//!   excluded and cannot be re-included
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ignorescan::{IgnoreWalker, PatternSet};
//! use std::path::Path;
//!
//! let patterns = PatternSet::from_ignore_file(Path::new("."), ".dockerignore")?;
//! let includes = IgnoreWalker::new(&patterns).scan(Path::new("."))?;
//!
//! for path in includes {
//!     println!("{path}");
//! }
//! # Ok::<(), ignorescan::ScanError>(())
//! ```

pub mod cli;
pub mod core;
pub mod ignore;

// Re-export commonly used types
pub use crate::core::{
    error::{Result, ScanError},
    types::{Entry, IncludeSet, WalkDecision},
};

pub use crate::ignore::{
    pattern::CompiledPattern,
    set::{PatternSet, DEFAULT_PATTERNS},
    walker::{EntryProvider, FsEntryProvider, IgnoreWalker},
};

/// Current version of ignorescan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
