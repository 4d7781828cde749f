//! [`SnapshotBuilder`] produces state snapshot JSON in the layout the external
//! tool writes.

use serde_json::{Value, json};

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    resources: Vec<Value>,
}

/// Qualified provider reference for a registry source, e.g.
/// `provider["registry.terraform.io/onelogin/onelogin"]`.
pub fn qualified_provider(source: &str) -> String {
    format!("provider[\"registry.terraform.io/{source}\"]")
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a managed resource with one instance per attribute object.
    pub fn resource(
        mut self,
        resource_type: &str,
        name: &str,
        provider: &str,
        instances: Vec<Value>,
    ) -> Self {
        self.resources.push(json!({
            "mode": "managed",
            "type": resource_type,
            "name": name,
            "provider": provider,
            "instances": instances
                .into_iter()
                .map(|attributes| json!({ "schema_version": 0, "attributes": attributes }))
                .collect::<Vec<_>>(),
        }));
        self
    }

    /// Add a data source, which renderers are expected to skip.
    pub fn data_source(mut self, resource_type: &str, name: &str, provider: &str) -> Self {
        self.resources.push(json!({
            "mode": "data",
            "type": resource_type,
            "name": name,
            "provider": provider,
            "instances": [{ "attributes": { "id": "data" } }],
        }));
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "version": 4,
            "terraform_version": "1.5.7",
            "serial": 1,
            "resources": self.resources,
        })
    }

    pub fn build(&self) -> String {
        serde_json::to_string_pretty(&self.to_value()).unwrap()
    }
}
