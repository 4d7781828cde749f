//! Command implementations for tfsync-cli

pub mod import;
pub mod list;
pub mod plan;
pub mod render;

pub use import::run_import;
pub use list::run_list_types;
pub use plan::run_plan;
pub use render::run_render;

use std::path::{Path, PathBuf};

use colored::Colorize;
use tfsync_core::{ConfigResolver, SyncConfig, SyncEngine, SyncPlan, TerraformCli};
use tfsync_fs::NormalizedPath;
use tfsync_importables::{Importable, Inventory, RemoteServices, ResourceKind};

use crate::cli::TargetArgs;
use crate::error::{CliError, Result};

/// Working directory plus the configuration resolved for it.
pub struct Context {
    pub root: NormalizedPath,
    pub config: SyncConfig,
}

impl Context {
    /// Resolve configuration layers for `cwd`, then apply global flags.
    pub fn load(cwd: &Path, extra_config: Option<&Path>, terraform: Option<&str>) -> Result<Self> {
        let root = NormalizedPath::new(cwd);
        let mut resolver = ConfigResolver::new(root.clone());
        if let Some(extra) = extra_config {
            resolver = resolver.with_extra_layer(root.resolve(extra));
        }
        let mut config = resolver.resolve()?;
        if let Some(binary) = terraform {
            config.terraform_binary = binary.to_string();
        }
        tracing::debug!(?config, "Resolved configuration");
        Ok(Self { root, config })
    }

    fn engine(&self, output: &Path, state: &Path) -> SyncEngine {
        let terraform = TerraformCli::new(&self.config.terraform_binary, self.root.to_native());
        SyncEngine::new(
            self.root.resolve(output),
            self.root.resolve(state),
            Box::new(terraform),
        )
    }

    /// Engine for the configuration file of `kind`.
    fn engine_for(&self, kind: ResourceKind, target: &TargetArgs) -> SyncEngine {
        let output = target
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.config.output_for(kind)));
        self.engine(&output, Path::new(&self.config.state_file))
    }

    /// Importable for `kind` backed by the configured inventory.
    fn importable(&self, kind: ResourceKind, target: &TargetArgs) -> Result<Box<dyn Importable>> {
        let inventory = match (&target.inventory, &self.config.inventory) {
            (Some(path), _) => self.root.resolve(path),
            (None, Some(path)) => self.root.resolve(path),
            (None, None) => {
                return Err(CliError::user(
                    "No inventory configured: pass --inventory or set [remote] inventory in tfsync.toml",
                ));
            }
        };
        let services = RemoteServices::from_inventory(Inventory::load(&inventory)?);
        Ok(kind.importable(&services))
    }
}

/// Print what `plan` would declare.
pub fn print_plan(plan: &SyncPlan) {
    println!(
        "{} {} new resource(s), {} new provider(s), {} already declared in {}",
        "=>".blue().bold(),
        plan.diff.new_resources.len(),
        plan.diff.new_providers.len(),
        plan.diff.declared.len(),
        plan.output.as_str().cyan()
    );
    for provider in &plan.diff.new_providers {
        println!("   {} provider {}", "+".green(), provider);
    }
    for definition in &plan.diff.new_resources {
        println!(
            "   {} {} {}",
            "+".green(),
            definition.address(),
            format!("(id {})", definition.import_id).dimmed()
        );
    }
}
