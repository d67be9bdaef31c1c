//! # kayfabe CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Kayfabe roster toolchain.
///
/// Validates roster files, applies status transitions through the
/// booking engine, and reports derived statuses.
#[derive(Parser, Debug)]
#[command(name = "kayfabe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Re-check every stored invariant of a roster file.
    Validate(kayfabe_cli::validate::ValidateArgs),
    /// Apply a transition to a named entity and save the roster.
    Transition(kayfabe_cli::transition::TransitionArgs),
    /// Report derived statuses, bookability, and composition.
    Status(kayfabe_cli::status::StatusArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => kayfabe_cli::validate::run(&args),
        Commands::Transition(args) => kayfabe_cli::transition::run(&args),
        Commands::Status(args) => kayfabe_cli::status::run(&args),
    }
}
