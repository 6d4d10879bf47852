//! StackDb shell
//!
//! Reads commands from standard input, one per line, and prints results to
//! standard output. Type `HELP` for the command list.

use std::io;

use anyhow::Context;
use clap::Parser;
use stackdb::{shell, Options, Session};

/// In-memory key-value store with nested transactions.
#[derive(Parser)]
#[command(name = "stackdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Diagnostic mode: enables the `R` command to print the raw layer stack
    #[arg(short = 't', long)]
    trace: bool,

    /// Do not print the usage text at startup
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still takes precedence
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = Options::new().trace(cli.trace).print_help_on_start(!cli.quiet);
    let mut session = Session::new(options).context("invalid session options")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut session, stdin.lock(), stdout.lock()).context("shell I/O failed")?;

    Ok(())
}
