//! The external configuration-management binary

use std::path::PathBuf;
use std::process::Command;

use crate::{Error, Result};

/// Operations the synchronization run needs from the external tool.
pub trait Terraform {
    /// Prepare the working directory. Called once per run before any import.
    fn init(&self) -> Result<()>;

    /// Bring the remote object `import_id` under management as `address`.
    fn import(&self, address: &str, import_id: &str) -> Result<()>;
}

/// Runs the real binary as a subprocess in a working directory.
#[derive(Debug, Clone)]
pub struct TerraformCli {
    binary: PathBuf,
    working_dir: PathBuf,
}

impl TerraformCli {
    pub fn new(binary: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: working_dir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.binary.display(), args.join(" "));
        tracing::debug!(%command, dir = %self.working_dir.display(), "Running terraform");

        let output = Command::new(&self.binary)
            .current_dir(&self.working_dir)
            .args(args)
            .output()
            .map_err(|source| Error::TerraformSpawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            Err(Error::TerraformFailed {
                command,
                code,
                stderr,
            })
        }
    }
}

impl Terraform for TerraformCli {
    fn init(&self) -> Result<()> {
        self.run(&["init", "-input=false"])?;
        tracing::info!("Initialized working directory");
        Ok(())
    }

    fn import(&self, address: &str, import_id: &str) -> Result<()> {
        self.run(&["import", "-input=false", address, import_id])?;
        tracing::info!(address, import_id, "Imported resource");
        Ok(())
    }
}
