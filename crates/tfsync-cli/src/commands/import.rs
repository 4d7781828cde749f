//! The import command

use colored::Colorize;
use dialoguer::Confirm;
use tfsync_core::{SyncOptions, SyncOutcome, SyncPlan};
use tfsync_importables::ResourceKind;

use super::{Context, print_plan};
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run a full synchronization for one resource type.
pub fn run_import(
    ctx: &Context,
    resource_type: &str,
    target: &TargetArgs,
    auto_approve: bool,
    dry_run: bool,
) -> Result<()> {
    let kind: ResourceKind = resource_type.parse()?;
    let engine = ctx.engine_for(kind, target);
    let importable = ctx.importable(kind, target)?;

    println!(
        "{} Synchronizing {} into {}",
        "=>".blue().bold(),
        kind.tag().cyan(),
        engine.output().as_str().cyan()
    );

    let options = SyncOptions {
        dry_run,
        auto_approve: auto_approve || ctx.config.auto_approve,
    };
    let report = engine.run(
        importable.as_ref(),
        target.id.as_deref(),
        &options,
        &mut |plan| {
            confirm(plan).map_err(|e| tfsync_core::Error::Prompt {
                message: e.to_string(),
            })
        },
    )?;

    match report.outcome {
        SyncOutcome::NothingNew => {
            println!("{} No new resources for {}.", "OK".green().bold(), kind);
        }
        SyncOutcome::Declined => {
            println!("{} Nothing was changed.", "Aborted.".yellow().bold());
        }
        SyncOutcome::DryRun => {
            for action in &report.actions {
                println!("   {} {}", "-".dimmed(), action);
            }
            println!();
            println!("Run without {} to apply.", "--dry-run".cyan());
        }
        SyncOutcome::Completed => {
            for action in &report.actions {
                println!("   {} {}", "+".green(), action);
            }
            println!(
                "{} Synchronized {}",
                "OK".green().bold(),
                engine.output().as_str().cyan()
            );
        }
    }
    Ok(())
}

fn confirm(plan: &SyncPlan) -> Result<bool> {
    print_plan(plan);
    println!();
    let proceed = Confirm::new()
        .with_prompt("Declare and import these resources?")
        .default(false)
        .interact()?;
    Ok(proceed)
}
