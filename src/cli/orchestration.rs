//! Hook workflow orchestration
//!
//! Keeps CLI argument parsing in `main.rs` apart from the validation run, so
//! the workflow can be called programmatically without depending on clap.

use anyhow::Result;

use crate::config::{self, MatchMode};
use crate::ui;
use crate::validator;

/// Exit status for an accepted commit message.
pub const EXIT_VALID: i32 = 0;
/// Exit status for a rejected message, and for any failure before validation.
pub const EXIT_INVALID: i32 = 1;

/// Arguments for the hook workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookArgs {
    /// Full commit message text
    pub message: String,

    /// Match mode given on the command line; wins over the config file
    pub match_mode: Option<MatchMode>,

    /// Path to a config file
    pub config_path: Option<String>,
}

/// Result of one hook run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// Extracted title when the message was accepted
    pub title: Option<String>,

    /// Process exit status to report to the caller
    pub exit_code: i32,
}

impl HookOutcome {
    pub fn is_valid(&self) -> bool {
        self.exit_code == EXIT_VALID
    }
}

/// Resolves the match mode for a run.
///
/// An explicit mode wins; otherwise the config file decides, and without one
/// the default applies.
pub fn resolve_match_mode(args: &HookArgs) -> Result<MatchMode> {
    if let Some(mode) = args.match_mode {
        return Ok(mode);
    }

    let config = config::load_config(args.config_path.as_deref())?;
    Ok(config.match_mode)
}

/// Main hook workflow
///
/// 1. Resolve the match mode
/// 2. Validate the message
/// 3. Print the report to stdout
/// 4. Map the verdict to an exit code
///
/// Returns `Err` only when the report cannot be written; a rejected message
/// is a normal outcome.
pub fn run_hook(args: HookArgs) -> Result<HookOutcome> {
    let mode = match resolve_match_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            return Ok(HookOutcome {
                title: None,
                exit_code: EXIT_INVALID,
            });
        }
    };

    tracing::debug!(%mode, len = args.message.len(), "validating commit message");

    let valid = validator::validate_with_mode(&args.message, mode).ok();
    ui::display_report(&args.message, valid.as_ref())?;

    let outcome = match valid {
        Some(valid) => HookOutcome {
            title: Some(valid.title),
            exit_code: EXIT_VALID,
        },
        None => HookOutcome {
            title: None,
            exit_code: EXIT_INVALID,
        },
    };

    Ok(outcome)
}
