//! Scan command implementation

use crate::ignore::set::PatternSet;
use crate::ignore::walker::IgnoreWalker;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the scan command
pub fn execute(
    basedir: PathBuf,
    ignorefile: String,
    follow_links: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if !basedir.is_dir() {
        return Err(anyhow::anyhow!(
            "Base directory not found: {}",
            basedir.display()
        ));
    }

    let patterns = PatternSet::from_ignore_file(&basedir, &ignorefile)?;
    tracing::info!(
        basedir = %basedir.display(),
        ignorefile = %ignorefile,
        patterns = patterns.len(),
        "starting scan"
    );

    let includes = IgnoreWalker::new(&patterns)
        .follow_links(follow_links)
        .scan(&basedir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&includes)?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{}",
            format!("Included files under {}:", basedir.display()).bright_blue()
        );
    }

    for path in &includes {
        println!("{}", path.bold());
    }

    if !quiet {
        println!(
            "\n{} {} entries included",
            "✓".green(),
            includes.len()
        );
    }

    Ok(())
}
