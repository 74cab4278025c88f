//! Ignore pattern normalization and compilation
//!
//! Raw lines from an ignore file are normalized (BOM/comment/blank handling,
//! inversion marker, lexical path cleanup) and compiled into anchored
//! path matchers. The glob dialect deliberately deviates from gitignore in
//! one respect: `*` matches across directory boundaries.

use crate::core::error::{Result, ScanError};
use path_clean::PathClean;
use regex::Regex;
use std::path::Path;

/// Marker prefixing patterns that re-include an otherwise-excluded path
pub const INVERT_PREFIX: char = '!';

/// A raw pattern line after comment/blank filtering and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPattern {
    /// Normalized pattern body, forward-slash form, inversion marker removed
    pub body: String,
    /// Whether the line carried a leading `!`
    pub invert: bool,
}

/// A compiled pattern from an ignore file
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The original pattern text as written in the ignore file
    original: String,
    /// Whether this pattern re-includes matches instead of excluding them
    invert: bool,
    /// Path segments preceding the final segment, for transitive-directory
    /// detection (empty for single-segment patterns)
    parent_chain: Vec<String>,
    /// Full-path matcher anchored to the relative path from the scan root
    matcher: Regex,
}

impl CompiledPattern {
    /// Compile a normalized pattern
    pub fn compile(raw: &RawPattern) -> Result<Self> {
        let parent_chain = if raw.body.contains('/') {
            let segments: Vec<&str> = raw.body.split('/').collect();
            segments[..segments.len() - 1]
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        let expression = translate(&raw.body);
        let matcher = Regex::new(&expression).map_err(|e| {
            ScanError::pattern_compilation(raw.original_text(), e.to_string())
        })?;

        tracing::debug!(
            pattern = %raw.body,
            invert = raw.invert,
            regex = %expression,
            "compiled ignore pattern"
        );

        Ok(Self {
            original: raw.original_text(),
            invert: raw.invert,
            parent_chain,
            matcher,
        })
    }

    /// The original pattern text, inversion marker included
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether this pattern re-includes matches
    pub fn invert(&self) -> bool {
        self.invert
    }

    /// Path segments preceding the final segment
    pub fn parent_chain(&self) -> &[String] {
        &self.parent_chain
    }

    /// Match the full relative path (forward-slash form) of an entry
    pub fn matches(&self, relative_path: &str) -> bool {
        self.matcher.is_match(relative_path)
    }
}

impl RawPattern {
    fn original_text(&self) -> String {
        if self.invert {
            format!("{}{}", INVERT_PREFIX, self.body)
        } else {
            self.body.clone()
        }
    }
}

/// Normalize one ignore-file line
///
/// Returns `None` for lines that carry no pattern: blanks, comments, and a
/// bare inversion marker. `first_line` controls BOM stripping, which applies
/// only to the first line of the file.
pub fn normalize_line(line: &str, first_line: bool) -> Option<RawPattern> {
    let line = if first_line {
        line.strip_prefix('\u{FEFF}').unwrap_or(line)
    } else {
        line
    };

    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (invert, body) = match line.strip_prefix(INVERT_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    if body.is_empty() {
        return None;
    }

    // Collapse `.`, `..` and duplicate separators; cleaned paths are
    // already in forward-slash form on the platforms we walk
    let cleaned = Path::new(body).clean();
    let mut body = cleaned.to_string_lossy().into_owned();

    if body.len() > 1 && body.starts_with('/') {
        body.remove(0);
    }

    Some(RawPattern { body, invert })
}

/// Normalize a whole sequence of lines, keeping file order
pub fn normalize_lines<I, S>(lines: I) -> Vec<RawPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(i, line)| normalize_line(line.as_ref(), i == 0))
        .collect()
}

/// Translate a normalized glob pattern into an anchored regex expression
///
/// Rules:
/// - `*` matches zero or more arbitrary characters, including `/`
/// - `**/` collapses to an optional any-characters-then-separator group;
///   `**` at end of pattern matches the rest of the path unconditionally
/// - `?` matches exactly one character that is not `/`
/// - `.` and `$` are escaped as literals
/// - `\` passes through, escaping the next character of the expression
/// - everything else passes through literally
fn translate(pattern: &str) -> String {
    let mut expression = String::with_capacity(pattern.len() + 8);
    expression.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    // Treat **/ as **
                    if chars.peek() == Some(&'/') {
                        chars.next();
                    }
                    if chars.peek().is_none() {
                        expression.push_str(".*");
                    } else {
                        expression.push_str("(.*/)?");
                    }
                } else {
                    expression.push_str(".*");
                }
            },
            '?' => expression.push_str("[^/]"),
            '.' | '$' => {
                expression.push('\\');
                expression.push(ch);
            },
            '\\' => expression.push('\\'),
            other => expression.push(other),
        }
    }

    expression.push('$');
    expression
}
