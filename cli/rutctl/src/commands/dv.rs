//! Check-digit derivation command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use flota_rut::Rut;

use crate::output::{print_single, OutputFormat};

/// Compute the check digit for a bare body.
#[derive(Debug, Args)]
pub struct DvCommand {
    /// Identifier body, without the check digit; punctuation is stripped.
    #[arg(value_name = "BODY")]
    body: String,
}

#[derive(Debug, Serialize)]
struct DvReport {
    body: String,
    check_digit: char,
    canonical: String,
}

impl DvCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let rut = Rut::from_body(&self.body)
            .with_context(|| format!("cannot derive a check digit from '{}'", self.body))?;

        match format {
            OutputFormat::Table => println!("{}", rut.check_digit()),
            OutputFormat::Json => print_single(&DvReport {
                body: rut.body().to_string(),
                check_digit: rut.check_digit(),
                canonical: rut.to_string(),
            }),
        }
        Ok(())
    }
}
