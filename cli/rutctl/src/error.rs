//! Error handling and display for the CLI.

use colored::Colorize;
use flota_rut::RutError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Keep "missing digits" and "checksum mismatch" distinguishable
    if let Some(rut_err) = err.downcast_ref::<RutError>() {
        match rut_err {
            RutError::Empty | RutError::TooShort => {
                eprintln!(
                    "\n{}",
                    "Hint: Enter the identifier digits, e.g. `12345678` or `12.345.678-5`."
                        .yellow()
                );
            }
            RutError::InvalidCheckDigit { expected, .. } => {
                eprintln!(
                    "\n{}",
                    format!(
                        "Hint: The digits are present but the check digit does not match \
                         (expected '{expected}')."
                    )
                    .yellow()
                );
            }
        }
    }
}
