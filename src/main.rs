//! ignorescan CLI
//!
//! Command-line interface for the ignorescan directory scanner.

use anyhow::Result;
use clap::Parser;

use ignorescan::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {
            // Plain output when piped
            if !atty::is(atty::Stream::Stdout) {
                colored::control::set_override(false);
            }
        },
    }

    // Execute the command
    match cli.command {
        Commands::Scan {
            basedir,
            ignorefile,
            follow_links,
            json,
        } => commands::scan::execute(basedir, ignorefile, follow_links, json, cli.quiet),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
