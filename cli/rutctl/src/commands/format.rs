//! Canonical formatting command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

/// Print the canonical dotted form of a body.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Identifier body; punctuation is stripped.
    #[arg(value_name = "BODY")]
    body: String,

    /// Omit the check digit.
    #[arg(long)]
    bare: bool,
}

#[derive(Debug, Serialize)]
struct FormatReport {
    input: String,
    formatted: String,
}

impl FormatCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let formatted = flota_rut::format(&self.body, !self.bare);

        match format {
            OutputFormat::Table => println!("{}", formatted),
            OutputFormat::Json => print_single(&FormatReport {
                input: self.body,
                formatted,
            }),
        }
        Ok(())
    }
}
