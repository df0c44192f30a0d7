//! Commit message shape check.
//!
//! A message is valid when it reads `<title>:<summary>`, where the title is
//! one or more ASCII letters or digits and the summary may be empty.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::MatchMode;
use crate::error::{HookError, Result};

// The summary may hold anything except a line terminator: \n, \r, NEL, LS, PS.
const TITLE_PATTERN: &str = r"^([a-zA-Z0-9]+):([^\n\r\x{85}\x{2028}\x{2029}]*)$";

static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn title_regex() -> &'static Regex {
    TITLE_REGEX.get_or_init(|| Regex::new(TITLE_PATTERN).expect("title pattern is a valid regex"))
}

/// A commit message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMessage {
    pub title: String,
}

/// Validates a commit message using the default [`MatchMode`].
pub fn validate(message: &str) -> Result<ValidMessage> {
    validate_with_mode(message, MatchMode::default())
}

/// Validates a commit message, returning the title token on success.
///
/// With [`MatchMode::WholeMessage`] the pattern is anchored to the entire
/// input and the summary never crosses a line terminator (`\n`, `\r`,
/// U+0085, U+2028 or U+2029), so any message with a second line is rejected.
/// With [`MatchMode::FirstLine`] only the text before the first `\n` (minus a
/// trailing `\r`) is checked.
pub fn validate_with_mode(message: &str, mode: MatchMode) -> Result<ValidMessage> {
    let subject = match mode {
        MatchMode::WholeMessage => message,
        MatchMode::FirstLine => first_line(message),
    };

    let title = title_regex()
        .captures(subject)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string());

    match title {
        Some(title) => {
            tracing::debug!(%mode, %title, "commit message matched");
            Ok(ValidMessage { title })
        }
        None => {
            tracing::debug!(%mode, "commit message did not match");
            Err(HookError::PatternMismatch)
        }
    }
}

fn first_line(message: &str) -> &str {
    let line = message.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}
