//! State snapshot model
//!
//! Only the parts of the external tool's state file the renderer needs are
//! modelled; everything else is ignored on load.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use tfsync_fs::{NormalizedPath, io};
use tfsync_hcl::scanner::provider_source_key;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub resources: Vec<SnapshotResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotResource {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub instances: Vec<SnapshotInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SnapshotInstance {
    #[serde(default)]
    pub attributes: Map<String, JsonValue>,
}

impl Snapshot {
    /// Read and parse the snapshot at `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        let snapshot = Self::parse(&content).map_err(|e| Error::MalformedSnapshot {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path, resources = snapshot.resources.len(), "Loaded snapshot");
        Ok(snapshot)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Managed resources, data sources excluded.
    pub fn managed(&self) -> impl Iterator<Item = &SnapshotResource> {
        self.resources.iter().filter(|r| !r.is_data_source())
    }
}

impl SnapshotResource {
    pub fn is_data_source(&self) -> bool {
        self.mode.as_deref() == Some("data")
    }

    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }

    pub fn provider_ref(&self) -> Result<ProviderRef> {
        ProviderRef::parse(&self.provider).ok_or_else(|| Error::InvalidProviderRef {
            address: self.address(),
            reference: self.provider.clone(),
        })
    }
}

/// How a snapshot resource names its provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRef {
    /// `provider.<alias>`
    Legacy { alias: String },
    /// `provider["<host>/<namespace>/<name>"]`, optionally followed by `.<alias>`
    Qualified {
        /// `<namespace>/<name>`, host dropped.
        source: String,
        alias: Option<String>,
    },
}

fn is_label(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl ProviderRef {
    /// Parse either reference form; anything else is `None`.
    pub fn parse(reference: &str) -> Option<Self> {
        if let Some(rest) = reference.strip_prefix("provider[\"") {
            let (inner, tail) = rest.split_once("\"]")?;
            if inner.is_empty() || inner.split('/').any(str::is_empty) {
                return None;
            }
            let alias = match tail {
                "" => None,
                _ => {
                    let alias = tail.strip_prefix('.')?;
                    if !is_label(alias) {
                        return None;
                    }
                    Some(alias.to_string())
                }
            };
            return Some(Self::Qualified {
                source: provider_source_key(inner).to_string(),
                alias,
            });
        }

        let alias = reference.strip_prefix("provider.")?;
        is_label(alias).then(|| Self::Legacy {
            alias: alias.to_string(),
        })
    }

    /// Local provider name, the last segment of the source or the legacy alias.
    pub fn local_name(&self) -> &str {
        match self {
            Self::Legacy { alias } => alias,
            Self::Qualified { source, .. } => source.rsplit('/').next().unwrap_or(source),
        }
    }
}

impl fmt::Display for ProviderRef {
    /// The value written after `provider =` in a resource block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualified {
                alias: Some(alias), ..
            } => write!(f, "{}.{alias}", self.local_name()),
            _ => f.write_str(self.local_name()),
        }
    }
}
