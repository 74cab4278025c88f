//! Command-line interface for ignorescan

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// ignorescan - Directory scanner honoring dockerignore-style pattern files
#[derive(Parser)]
#[command(
    name = "ignorescan",
    version,
    about = "Scan a directory and list the files a build would include",
    long_about = "Scans a directory tree and lists every file and directory not excluded by a dockerignore-style ignore file, including inversion (!) patterns and built-in default exclusions."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output: auto, always, never
    #[arg(long, default_value = "auto", global = true)]
    pub color: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and list includable files
    Scan {
        /// Directory to scan
        #[arg(short = 'd', long, default_value = ".")]
        basedir: PathBuf,

        /// Ignore file name, looked up in the base directory root
        #[arg(short = 'i', long, default_value = ".dockerignore")]
        ignorefile: String,

        /// Follow symbolic links during traversal
        #[arg(long)]
        follow_links: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
