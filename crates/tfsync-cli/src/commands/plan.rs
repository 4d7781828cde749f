//! The plan command

use colored::Colorize;
use tfsync_importables::ResourceKind;

use super::{Context, print_plan};
use crate::cli::TargetArgs;
use crate::error::Result;

/// Report what an import would declare without writing anything.
pub fn run_plan(ctx: &Context, resource_type: &str, target: &TargetArgs) -> Result<()> {
    let kind: ResourceKind = resource_type.parse()?;
    let engine = ctx.engine_for(kind, target);
    let importable = ctx.importable(kind, target)?;

    let plan = engine.plan(importable.as_ref(), target.id.as_deref())?;
    if plan.is_empty() {
        println!("{} No new resources for {}.", "OK".green().bold(), kind);
        return Ok(());
    }

    print_plan(&plan);
    println!();
    println!(
        "Run {} to apply.",
        format!("tfsync import {kind}").cyan()
    );
    Ok(())
}
