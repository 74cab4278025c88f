//! Shell completion script generation

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Execute the completion command
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = "ignorescan";

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
