pub mod orchestration;

pub use orchestration::{run_hook, HookArgs, HookOutcome, EXIT_INVALID, EXIT_VALID};
