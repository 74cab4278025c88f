//! Tree walk with per-entry pattern evaluation and subtree pruning
//!
//! The walker drives a synchronous, single-threaded depth-first traversal
//! over an injected directory-entry provider, applies the pattern set to
//! every entry, and collects the relative paths that survive filtering.
//! All traversal state lives in a per-scan [`WalkState`], so concurrent
//! scans over disjoint roots never share mutable collections.

use crate::core::error::{Result, ScanError};
use crate::core::types::{Entry, IncludeSet, WalkDecision};
use crate::ignore::set::PatternSet;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use walkdir::WalkDir;

/// Supplier of directory entries, one level at a time
///
/// Entry order is implementation-defined. Injecting the provider keeps the
/// pruning logic testable with a synthetic, in-memory tree.
pub trait EntryProvider {
    /// Enumerate the immediate children of `dir`
    fn entries(&self, dir: &Path) -> Result<Vec<Entry>>;
}

/// Filesystem-backed entry provider
#[derive(Debug, Clone, Default)]
pub struct FsEntryProvider {
    follow_links: bool,
}

impl FsEntryProvider {
    /// Create a provider that does not follow symbolic links
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl EntryProvider for FsEntryProvider {
    fn entries(&self, dir: &Path) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links)
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
                });
                ScanError::walk(path, source)
            })?;

            entries.push(Entry {
                path: entry.path().to_path_buf(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}

/// Per-scan traversal state
///
/// Created fresh for every scan and discarded at scan end; never shared
/// across concurrent scans.
struct WalkState {
    base_dir: PathBuf,
    /// Directories already marked excluded, consulted for propagation to
    /// their descendants
    excluded_dirs: HashSet<PathBuf>,
    includes: IncludeSet,
}

impl WalkState {
    fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            excluded_dirs: HashSet::new(),
            includes: IncludeSet::new(),
        }
    }

    /// Relative forward-slash form of an entry path
    fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Walks a directory tree, applying a pattern set to every entry
///
/// The base directory itself is never evaluated: it is implicitly included
/// and never emitted.
pub struct IgnoreWalker<'a, P: EntryProvider = FsEntryProvider> {
    patterns: &'a PatternSet,
    provider: P,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> IgnoreWalker<'a, FsEntryProvider> {
    /// Create a walker over the real filesystem
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self::with_provider(patterns, FsEntryProvider::new())
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.provider = self.provider.follow_links(follow);
        self
    }
}

impl<'a, P: EntryProvider> IgnoreWalker<'a, P> {
    /// Create a walker over a custom entry provider
    pub fn with_provider(patterns: &'a PatternSet, provider: P) -> Self {
        Self {
            patterns,
            provider,
            cancel: None,
        }
    }

    /// Attach a cancellation flag, checked once per visited entry
    ///
    /// A set flag aborts the scan with [`ScanError::Cancelled`]; no partial
    /// result is returned.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Scan a directory tree, returning included relative paths in
    /// discovery order
    pub fn scan(&self, base_dir: &Path) -> Result<Vec<String>> {
        let mut state = WalkState::new(base_dir);
        self.walk_dir(base_dir, &mut state)?;

        tracing::debug!(
            base_dir = %base_dir.display(),
            included = state.includes.len(),
            "scan complete"
        );

        Ok(state.includes.into_vec())
    }

    fn walk_dir(&self, dir: &Path, state: &mut WalkState) -> Result<()> {
        for entry in self.provider.entries(dir)? {
            if let Some(cancel) = &self.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(ScanError::cancelled(entry.path));
                }
            }

            let decision = self.visit(&entry, state);
            if entry.is_dir && decision == WalkDecision::Descend {
                self.walk_dir(&entry.path, state)?;
            }
        }

        Ok(())
    }

    /// Evaluate one entry against the pattern set
    ///
    /// Returns the pruning decision for directories; for files the decision
    /// carries no meaning.
    fn visit(&self, entry: &Entry, state: &mut WalkState) -> WalkDecision {
        // Built-in default names skip the whole subtree before any pattern
        // runs; no inversion can resurrect anything beneath them.
        if self.patterns.is_default_name(&entry.name) {
            tracing::debug!(path = %entry.path.display(), "default name, subtree skipped");
            return WalkDecision::Skip;
        }

        let relative = state.relative(&entry.path);
        let parent_excluded = entry
            .path
            .parent()
            .map(|p| state.excluded_dirs.contains(p))
            .unwrap_or(false);

        let mut excluded = false;
        // A transitive directory is excluded itself but still descended,
        // because an inversion below it needs evaluation. e.g. with
        //   target
        //   !target/*-runner.jar
        // the directory `target` is transitive.
        let mut transitive = false;

        for pattern in self.patterns.iter() {
            // Exclusion propagates from an excluded parent; a later
            // inversion may still re-include the entry.
            if !pattern.invert() && parent_excluded {
                excluded = true;
                continue;
            }

            if pattern.matches(&relative) {
                excluded = true;

                // An inversion match wins locally, regardless of other
                // non-inverting matches against the same entry.
                if pattern.invert() {
                    state.includes.insert(relative.clone());
                }
            }

            if entry.is_dir && pattern.invert() && !pattern.parent_chain().is_empty() {
                let chain_path = state
                    .base_dir
                    .join(pattern.parent_chain().iter().collect::<PathBuf>());
                if entry.path == chain_path {
                    transitive = true;
                }
            }
        }

        if excluded {
            if entry.is_dir {
                state.excluded_dirs.insert(entry.path.clone());
            }
        } else {
            state.includes.insert(relative);
        }

        if entry.is_dir && excluded && !transitive {
            tracing::debug!(path = %entry.path.display(), "directory pruned from traversal");
            WalkDecision::Skip
        } else {
            WalkDecision::Descend
        }
    }
}
