//! The identifying record of one remote resource

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;

/// What is needed to declare one remote resource locally and import it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Provider source, e.g. `onelogin/onelogin`.
    pub provider: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Locally unique declaration name.
    pub name: String,
    pub import_id: String,
}

impl ResourceDefinition {
    pub fn new(kind: ResourceKind, name: impl Into<String>, import_id: impl Into<String>) -> Self {
        Self {
            provider: kind.provider().to_string(),
            resource_type: kind.tag().to_string(),
            name: name.into(),
            import_id: import_id.into(),
        }
    }

    /// `type.name`, the address used by the external tool.
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }
}
