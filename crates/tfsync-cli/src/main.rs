//! tfsync CLI
//!
//! Declares remote resources in a terraform configuration file, imports them
//! and re-renders the file from the resulting state.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.command == Commands::ListTypes {
        return commands::run_list_types();
    }

    let cwd = std::env::current_dir()?;
    let ctx = Context::load(&cwd, cli.config.as_deref(), cli.terraform.as_deref())?;

    match cli.command {
        Commands::Import {
            resource_type,
            target,
            auto_approve,
            dry_run,
        } => commands::run_import(&ctx, &resource_type, &target, auto_approve, dry_run),
        Commands::Render {
            output,
            state,
            diff,
        } => commands::run_render(&ctx, output.as_deref(), state.as_deref(), diff),
        Commands::Plan {
            resource_type,
            target,
        } => commands::run_plan(&ctx, &resource_type, &target),
        Commands::ListTypes => commands::run_list_types(),
    }
}

/// `--verbose` logs at debug, otherwise `RUST_LOG` or warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
