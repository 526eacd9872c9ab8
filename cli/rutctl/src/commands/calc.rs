//! Interactive check-digit calculator.
//!
//! Reads bodies from stdin, prints the check digit and canonical form, and
//! re-validates its own output before reporting success.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use flota_rut::{validate, Rut, RutError};

use crate::output::print_info;

/// Interactive check-digit calculator.
#[derive(Debug, Args)]
pub struct CalcCommand {}

impl CalcCommand {
    pub fn run(self) -> Result<()> {
        print_info("Enter an identifier body (digits only, no check digit); 'q' to quit.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break; // EOF
            };

            match eval_line(&line?) {
                None => break,
                Some(Ok(rut)) => {
                    println!("{} check digit: {}", "✓".green(), rut.check_digit());
                    println!("{} canonical:   {}", "✓".green(), rut);

                    // The module must accept its own output
                    if validate(&rut.to_string()) {
                        println!("{} verified\n", "✓".green());
                    } else {
                        println!("{} self-validation failed\n", "✗".red());
                    }
                }
                Some(Err(err)) => {
                    println!("{} {}\n", "✗".red(), err);
                }
            }
        }

        Ok(())
    }
}

/// Interprets a single calculator line. `None` means quit.
fn eval_line(line: &str) -> Option<Result<Rut, RutError>> {
    let input = line.trim();
    if matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return None;
    }
    Some(Rut::from_body(input))
}
