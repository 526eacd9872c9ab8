//! CLI commands.

mod calc;
mod check;
mod dv;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// flota RUT CLI - Validate and format Chilean RUT identifiers.
#[derive(Debug, Parser)]
#[command(name = "rut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate full identifiers (body plus check digit).
    Check(check::CheckCommand),

    /// Compute the check digit for a bare body.
    Dv(dv::DvCommand),

    /// Print the canonical dotted form of a body.
    Format(format::FormatCommand),

    /// Interactive check-digit calculator.
    Calc(calc::CalcCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let format: OutputFormat = self.format.parse()?;

        tracing::debug!(command = ?self.command, "dispatching command");

        match self.command {
            Commands::Check(cmd) => cmd.run(format),
            Commands::Dv(cmd) => cmd.run(format),
            Commands::Format(cmd) => cmd.run(format),
            Commands::Calc(cmd) => cmd.run(),
        }
    }
}
