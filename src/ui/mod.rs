//! User interface module - formatting and terminal output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing to stdout/stderr

use std::io::{self, Write};

use anyhow::Result;

use crate::validator::ValidMessage;

pub mod formatter;

pub use formatter::{format_error, format_report, INVALID_NOTICE, VALID_NOTICE};

/// Prints the validation report to stdout and flushes it.
///
/// The flush matters because the process exits right after.
pub fn display_report(message: &str, outcome: Option<&ValidMessage>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_report(message, outcome).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}
