//! Identifier validation command.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use flota_rut::Rut;

use crate::output::{print_output, OutputFormat};

/// Validate full identifiers.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identifiers to validate, with or without punctuation.
    #[arg(required = true, value_name = "IDENTIFIER")]
    identifiers: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Valid")]
    valid: bool,
    #[tabled(rename = "Canonical")]
    canonical: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl CheckCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let rows: Vec<CheckRow> = self.identifiers.iter().map(|raw| check_row(raw)).collect();
        let invalid = rows.iter().filter(|r| !r.valid).count();

        print_output(&rows, format);

        if invalid > 0 {
            bail!("{invalid} of {} identifiers failed validation", rows.len());
        }
        Ok(())
    }
}

fn check_row(raw: &str) -> CheckRow {
    match Rut::parse(raw) {
        Ok(rut) => CheckRow {
            identifier: raw.to_string(),
            valid: true,
            canonical: rut.to_string(),
            detail: String::new(),
        },
        Err(err) => CheckRow {
            identifier: raw.to_string(),
            valid: false,
            canonical: String::new(),
            detail: err.to_string(),
        },
    }
}
