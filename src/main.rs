use std::process;

use anyhow::Result;
use clap::Parser;

use commit_msg_hook::cli::{self, HookArgs, EXIT_INVALID};
use commit_msg_hook::MatchMode;

#[derive(clap::Parser)]
#[command(
    name = "commit-msg-hook",
    version,
    about = "Check that a commit message starts with '<title>:'"
)]
struct Args {
    #[arg(allow_hyphen_values = true, help = "Full commit message text")]
    message: String,

    #[arg(
        short,
        long,
        value_enum,
        help = "How much of the message the title pattern must cover [default: whole-message]"
    )]
    mode: Option<MatchMode>,

    #[arg(short, long, help = "TOML configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Exit status is what the hook caller reads; a lost usage message is tolerable
            e.print().ok();
            process::exit(EXIT_INVALID);
        }
    };

    let outcome = cli::run_hook(HookArgs {
        message: args.message,
        match_mode: args.mode,
        config_path: args.config,
    })?;

    process::exit(outcome.exit_code);
}
