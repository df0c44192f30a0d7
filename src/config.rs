use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

use crate::error::{HookError, Result};

/// How much of a commit message the title pattern has to cover.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Only the first line is checked; any body below it is ignored.
    FirstLine,
    /// The whole message must match, so a message with a body is rejected.
    #[default]
    WholeMessage,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::FirstLine => write!(f, "first-line"),
            MatchMode::WholeMessage => write!(f, "whole-message"),
        }
    }
}

/// Represents the complete configuration for commit-msg-hook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
}

/// Loads configuration from file or returns defaults.
///
/// Only an explicitly given path is read; there is no implicit lookup, so a
/// hook invoked without `--config` always behaves the same way.
///
/// # Returns
/// * `Ok(HookConfig)` - Loaded or default configuration
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<HookConfig> {
    let Some(path) = config_path else {
        return Ok(HookConfig::default());
    };

    tracing::debug!(path, "loading hook configuration");
    let config_str = fs::read_to_string(path)
        .map_err(|e| HookError::config(format!("cannot read {}: {}", path, e)))?;
    let config: HookConfig = toml::from_str(&config_str)?;
    Ok(config)
}
