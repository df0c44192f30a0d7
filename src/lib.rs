pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod validator;

pub use config::{HookConfig, MatchMode};
pub use error::{HookError, Result};
pub use validator::{validate, validate_with_mode, ValidMessage};
