use thiserror::Error;

/// Unified error type for commit-msg-hook operations
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Commit message does not match the required '<title>: <summary>' shape")]
    PatternMismatch,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-msg-hook
pub type Result<T> = std::result::Result<T, HookError>;

impl HookError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HookError::Config(msg.into())
    }

    pub fn is_pattern_mismatch(&self) -> bool {
        matches!(self, HookError::PatternMismatch)
    }
}

impl From<toml::de::Error> for HookError {
    fn from(err: toml::de::Error) -> Self {
        HookError::config(err.message())
    }
}
