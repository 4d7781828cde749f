//! Layered run configuration
//!
//! Configuration is merged from up to four TOML or JSON files, later layers
//! overriding earlier ones key by key:
//! 1. Global defaults (`<config_dir>/tfsync/config.toml`)
//! 2. Project config (`tfsync.toml` in the working directory)
//! 3. Local overrides (`tfsync.local.toml` in the working directory)
//! 4. An extra file given on the command line
//!
//! Command-line flags are applied on top of the result by the caller.

use std::path::PathBuf;

use serde::Deserialize;
use tfsync_fs::{ConfigStore, NormalizedPath};
use tfsync_importables::ResourceKind;

use crate::Result;

pub const PROJECT_CONFIG: &str = "tfsync.toml";
pub const LOCAL_CONFIG: &str = "tfsync.local.toml";

const DEFAULT_BINARY: &str = "terraform";
const DEFAULT_STATE_FILE: &str = "terraform.tfstate";

/// Effective configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// The external binary to invoke
    pub terraform_binary: String,
    /// State snapshot written by the external binary, relative to the working directory
    pub state_file: String,
    /// Configuration file to synchronize; derived from the resource type when unset
    pub output: Option<String>,
    /// Skip the confirmation prompt
    pub auto_approve: bool,
    /// Inventory export used as the remote
    pub inventory: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            terraform_binary: DEFAULT_BINARY.to_string(),
            state_file: DEFAULT_STATE_FILE.to_string(),
            output: None,
            auto_approve: false,
            inventory: None,
        }
    }
}

impl SyncConfig {
    /// Configuration file for `kind`: the configured output, or `<prefix>.tf`.
    pub fn output_for(&self, kind: ResourceKind) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.tf", kind.file_prefix()))
    }

    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(binary) = layer.terraform.binary {
            self.terraform_binary = binary;
        }
        if let Some(state_file) = layer.terraform.state_file {
            self.state_file = state_file;
        }
        if let Some(output) = layer.sync.output {
            self.output = Some(output);
        }
        if let Some(auto_approve) = layer.sync.auto_approve {
            self.auto_approve = auto_approve;
        }
        if let Some(inventory) = layer.remote.inventory {
            self.inventory = Some(inventory);
        }
    }
}

/// One configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    terraform: TerraformSection,
    sync: SyncSection,
    remote: RemoteSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TerraformSection {
    binary: Option<String>,
    state_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SyncSection {
    output: Option<String>,
    auto_approve: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RemoteSection {
    inventory: Option<String>,
}

/// Resolves [`SyncConfig`] for a working directory.
pub struct ConfigResolver {
    root: NormalizedPath,
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
    extra_layer: Option<NormalizedPath>,
    store: ConfigStore,
}

impl ConfigResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            global_config_dir_override: None,
            extra_layer: None,
            store: ConfigStore::new(),
        }
    }

    /// Use `global_config_dir` instead of the platform config directory.
    pub fn with_global_config_dir(mut self, global_config_dir: PathBuf) -> Self {
        self.global_config_dir_override = Some(global_config_dir);
        self
    }

    /// Add a final layer that must exist.
    pub fn with_extra_layer(mut self, path: NormalizedPath) -> Self {
        self.extra_layer = Some(path);
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("tfsync"))
    }

    /// Merge every present layer over the defaults.
    ///
    /// Missing optional layers are skipped; a layer that fails to parse is an
    /// error.
    pub fn resolve(&self) -> Result<SyncConfig> {
        let mut config = SyncConfig::default();

        let mut optional = Vec::with_capacity(3);
        if let Some(global_dir) = self.global_config_dir() {
            optional.push(NormalizedPath::new(global_dir.join("config.toml")));
        }
        optional.push(self.root.join(PROJECT_CONFIG));
        optional.push(self.root.join(LOCAL_CONFIG));

        for path in &optional {
            match self.store.load_optional::<ConfigLayer>(path)? {
                Some(layer) => {
                    tracing::debug!(path = %path, "Applying config layer");
                    config.apply(layer);
                }
                None => tracing::debug!(path = %path, "No config layer, skipping"),
            }
        }

        if let Some(ref extra) = self.extra_layer {
            tracing::debug!(path = %extra, "Applying extra config layer");
            config.apply(self.store.load(extra)?);
        }

        Ok(config)
    }
}
