#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flutterfix_rewrite::{Fix, RewriteConfig, fixes, run_fix};

#[derive(Parser, Debug)]
#[command(
    name = "flutterfix",
    about = "Regex-based maintenance fixes for a Flutter source tree",
    arg_required_else_help = true
)]
struct Cli {
    /// Project root directory.
    #[arg(
        long,
        short = 'r',
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add `if (mounted)` guards before Navigator/ScaffoldMessenger calls.
    ContextGuards,
    /// Comment out print() calls with a DEBUG marker.
    DebugPrints,
    /// Rewrite .withOpacity(x) to .withValues(alpha: x).
    Deprecations,
}

fn select_fix(command: &Command) -> Fix {
    match command {
        Command::ContextGuards => fixes::context_guards(),
        Command::DebugPrints => fixes::debug_prints(),
        Command::Deprecations => fixes::opacity_deprecations(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; diagnostics go to stderr so stdout stays the
    // product surface.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flutterfix_rewrite=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let fix = select_fix(&cli.command);
    let report = run_fix(&cli.root, &fix, &RewriteConfig::default());
    println!("{}", fix.summary(&report));

    // Per-file failures are already reported; the run itself succeeds.
    Ok(())
}
