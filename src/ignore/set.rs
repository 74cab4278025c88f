//! Ordered pattern collection with built-in default exclusions

use crate::core::error::{Result, ScanError};
use crate::ignore::pattern::{normalize_lines, CompiledPattern, RawPattern};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Built-in names excluded from every scan: the version-control directory
/// and dependency/module directories. These cannot be overridden by any
/// inversion pattern.
pub const DEFAULT_PATTERNS: [&str; 3] = [".git", "vendor", "node_modules"];

static DEFAULT_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DEFAULT_PATTERNS.iter().copied().collect());

/// Ordered collection of compiled matchers plus built-in default exclusions
///
/// Defaults come first, then file patterns in file order. Evaluation order
/// determines which inversion applies when multiple patterns match the same
/// entry. No deduplication is performed: ignore files are small, and two
/// structurally identical inverting patterns both take effect.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Build a pattern set from ignore-file lines
    ///
    /// Compiles the built-in defaults first, then the given lines in order.
    /// Any line that fails to compile aborts construction; no partial set is
    /// ever used for a scan.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: Vec<RawPattern> = DEFAULT_PATTERNS
            .iter()
            .map(|name| RawPattern {
                body: name.to_string(),
                invert: false,
            })
            .collect();
        raw.extend(normalize_lines(lines));

        let patterns = raw
            .iter()
            .map(CompiledPattern::compile)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = patterns.len(), "built pattern set");

        Ok(Self { patterns })
    }

    /// Build a pattern set containing only the built-in defaults
    pub fn defaults_only() -> Result<Self> {
        Self::build(std::iter::empty::<&str>())
    }

    /// Build a pattern set from `<base_dir>/<file_name>`
    ///
    /// A missing ignore file is not an error: only the default patterns
    /// apply. Any other read failure is fatal.
    pub fn from_ignore_file(base_dir: &Path, file_name: &str) -> Result<Self> {
        let ignore_path = base_dir.join(file_name);

        let content = match fs::read_to_string(&ignore_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %ignore_path.display(), "no ignore file, using defaults");
                return Self::defaults_only();
            },
            Err(e) => return Err(ScanError::ignore_file_read(ignore_path, e)),
        };

        Self::build(content.lines())
    }

    /// Check whether a bare entry name is a built-in default
    ///
    /// Entries with a default name are skipped unconditionally, before any
    /// pattern evaluation.
    pub fn is_default_name(&self, name: &str) -> bool {
        DEFAULT_NAMES.contains(name)
    }

    /// Iterate the compiled patterns in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    /// All compiled patterns in evaluation order
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Number of compiled patterns, defaults included
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set holds no patterns (never true in practice, since the
    /// defaults are always present)
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_come_first_in_file_order() -> Result<()> {
        let set = PatternSet::build(["lib", "*.md", "!README.md"])?;

        let originals: Vec<&str> = set.iter().map(|p| p.original()).collect();
        assert_eq!(
            originals,
            vec![".git", "vendor", "node_modules", "lib", "*.md", "!README.md"]
        );
        Ok(())
    }

    #[test]
    fn test_defaults_only() -> Result<()> {
        let set = PatternSet::defaults_only()?;
        assert_eq!(set.len(), DEFAULT_PATTERNS.len());
        assert!(set.is_default_name(".git"));
        assert!(set.is_default_name("vendor"));
        assert!(set.is_default_name("node_modules"));
        assert!(!set.is_default_name("target"));
        Ok(())
    }

    #[test]
    fn test_identical_patterns_are_not_deduplicated() -> Result<()> {
        let set = PatternSet::build(["!keep.txt", "!keep.txt"])?;
        assert_eq!(set.len(), DEFAULT_PATTERNS.len() + 2);
        Ok(())
    }

    #[test]
    fn test_comment_and_blank_lines_do_not_count() -> Result<()> {
        let set = PatternSet::build(["# comment", "", "   ", "target"])?;
        assert_eq!(set.len(), DEFAULT_PATTERNS.len() + 1);
        Ok(())
    }

    #[test]
    fn test_one_bad_pattern_aborts_construction() {
        let result = PatternSet::build(["lib", "broken(group", "target"]);
        assert!(matches!(
            result,
            Err(ScanError::PatternCompilation { .. })
        ));
    }

    #[test]
    fn test_from_ignore_file_present() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(".dockerignore"),
            "lib\n*.md\n!README.md\ntemp?\ntarget\n!target/*-runner.jar\n",
        )?;

        let set = PatternSet::from_ignore_file(temp_dir.path(), ".dockerignore")?;
        assert_eq!(set.len(), DEFAULT_PATTERNS.len() + 6);
        Ok(())
    }

    #[test]
    fn test_from_ignore_file_absent_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let set = PatternSet::from_ignore_file(temp_dir.path(), ".dockerignore")?;
        assert_eq!(set.len(), DEFAULT_PATTERNS.len());
        Ok(())
    }

    #[test]
    fn test_from_ignore_file_with_bom() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(".dockerignore"),
            "\u{FEFF}target\nlib\n",
        )?;

        let set = PatternSet::from_ignore_file(temp_dir.path(), ".dockerignore")?;
        let originals: Vec<&str> = set.iter().map(|p| p.original()).collect();
        assert!(originals.contains(&"target"));
        Ok(())
    }
}
