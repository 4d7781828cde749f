//! SyncEngine implementation

use tfsync_fs::{NormalizedPath, io};
use tfsync_hcl::{DefinitionIndex, ShapeRegistry, scan};
use tfsync_importables::{Importable, KindShapes};

use super::{SyncOptions, SyncOutcome, SyncPlan, SyncReport};
use crate::Result;
use crate::adapter::adapt;
use crate::declare::with_declarations;
use crate::diff::{Diff, diff};
use crate::state::Snapshot;
use crate::terraform::Terraform;

/// Drives synchronization runs against one configuration file.
pub struct SyncEngine {
    /// Configuration file being synchronized
    output: NormalizedPath,
    /// Snapshot the external binary writes on import
    state_file: NormalizedPath,
    terraform: Box<dyn Terraform>,
    shapes: Box<dyn ShapeRegistry>,
}

impl SyncEngine {
    /// Create an engine using the shapes of the built-in resource kinds.
    pub fn new(
        output: NormalizedPath,
        state_file: NormalizedPath,
        terraform: Box<dyn Terraform>,
    ) -> Self {
        Self {
            output,
            state_file,
            terraform,
            shapes: Box::new(KindShapes),
        }
    }

    /// Replace the shape registry used when rendering.
    pub fn with_shapes(mut self, shapes: Box<dyn ShapeRegistry>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn output(&self) -> &NormalizedPath {
        &self.output
    }

    /// Declarations already in the configuration file; a missing file has none.
    pub fn scan_output(&self) -> Result<DefinitionIndex> {
        if !self.output.is_file() {
            tracing::debug!(path = %self.output, "Configuration file not found, nothing declared");
            return Ok(DefinitionIndex::new());
        }
        let index = scan(io::open_reader(&self.output)?)?;
        Ok(index)
    }

    /// Fetch remote definitions and diff them against the configuration file.
    ///
    /// Writes nothing.
    pub fn plan(&self, importable: &dyn Importable, search_id: Option<&str>) -> Result<SyncPlan> {
        let remote = importable.import_from_remote(search_id)?;
        tracing::info!(kind = %importable.kind(), count = remote.len(), "Fetched remote definitions");

        let index = self.scan_output()?;
        Ok(SyncPlan {
            output: self.output.clone(),
            diff: diff(&index, &remote),
        })
    }

    /// First write phase: declaration headers for everything new.
    ///
    /// Headers are appended. The file is only rewritten when a provider has to
    /// go into an existing `required_providers` block.
    pub fn declare(&self, diff: &Diff) -> Result<()> {
        let existing = io::read_text_or_empty(&self.output)?;
        let updated = with_declarations(&existing, diff);
        let suffix = updated
            .strip_prefix(existing.as_str())
            .filter(|_| existing.is_empty() || existing.ends_with('\n'));
        match suffix {
            Some(suffix) => io::append_text(&self.output, suffix)?,
            None => io::write_text(&self.output, &updated)?,
        }
        tracing::info!(
            path = %self.output,
            resources = diff.new_resources.len(),
            providers = diff.new_providers.len(),
            "Declared new resources"
        );
        Ok(())
    }

    /// Import every new resource. Stops at the first failure.
    pub fn import(&self, diff: &Diff, report: &mut SyncReport) -> Result<()> {
        self.terraform.init()?;
        for definition in &diff.new_resources {
            let address = definition.address();
            self.terraform.import(&address, &definition.import_id)?;
            report.push(format!("Imported {address} ({})", definition.import_id));
        }
        Ok(())
    }

    /// Configuration text for the current snapshot.
    pub fn render(&self) -> Result<String> {
        let snapshot = Snapshot::load(&self.state_file)?;
        adapt(&snapshot, self.shapes.as_ref())
    }

    /// Second write phase: replace the configuration file.
    pub fn write_rendered(&self, text: &str) -> Result<()> {
        io::write_text(&self.output, text)?;
        tracing::info!(path = %self.output, bytes = text.len(), "Rendered configuration");
        Ok(())
    }

    /// Run a full synchronization for one resource kind.
    ///
    /// `confirm` is asked with the plan unless `options.auto_approve` is set.
    /// A failure leaves the file as written by the last completed phase.
    pub fn run(
        &self,
        importable: &dyn Importable,
        search_id: Option<&str>,
        options: &SyncOptions,
        confirm: &mut dyn FnMut(&SyncPlan) -> Result<bool>,
    ) -> Result<SyncReport> {
        let plan = self.plan(importable, search_id)?;

        if plan.is_empty() {
            tracing::info!(path = %self.output, "No new resources");
            return Ok(SyncReport::new(SyncOutcome::NothingNew));
        }

        if options.dry_run {
            return Ok(self.dry_run_report(&plan));
        }

        if !options.auto_approve && !confirm(&plan)? {
            tracing::info!("Synchronization declined");
            return Ok(SyncReport::new(SyncOutcome::Declined));
        }

        let mut report = SyncReport::new(SyncOutcome::Completed);
        self.declare(&plan.diff)?;
        for provider in &plan.diff.new_providers {
            report.push(format!("Declared provider {provider}"));
        }
        for definition in &plan.diff.new_resources {
            report.push(format!("Declared resource {}", definition.address()));
        }

        self.import(&plan.diff, &mut report)?;

        let text = self.render()?;
        self.write_rendered(&text)?;
        report.push(format!("Wrote {}", self.output));

        Ok(report)
    }

    fn dry_run_report(&self, plan: &SyncPlan) -> SyncReport {
        let mut report = SyncReport::new(SyncOutcome::DryRun);
        for provider in &plan.diff.new_providers {
            report.push(format!("[dry-run] Would declare provider {provider}"));
        }
        for definition in &plan.diff.new_resources {
            report.push(format!(
                "[dry-run] Would declare resource {}",
                definition.address()
            ));
        }
        for definition in &plan.diff.new_resources {
            report.push(format!(
                "[dry-run] Would import {} ({})",
                definition.address(),
                definition.import_id
            ));
        }
        report.push(format!("[dry-run] Would write {}", self.output));
        report
    }
}
