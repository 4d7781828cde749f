//! Partition of remote definitions into declared and new

use tfsync_hcl::DefinitionIndex;
use tfsync_importables::ResourceDefinition;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Definitions already present in the configuration file.
    pub declared: Vec<ResourceDefinition>,
    /// Definitions to declare and import, in remote order.
    pub new_resources: Vec<ResourceDefinition>,
    /// Providers the new declarations need, in first-seen order.
    pub new_providers: Vec<String>,
}

impl Diff {
    /// True when no resource is new.
    ///
    /// Providers are only declared for new resources, so a provider missing
    /// from the index does not count on its own.
    pub fn is_empty(&self) -> bool {
        self.new_resources.is_empty()
    }
}

/// Compare `remote` against what `index` already declares.
///
/// Every definition is tested against `index` as scanned, so a duplicate that
/// is not yet declared appears in `new_resources` once per occurrence.
pub fn diff(index: &DefinitionIndex, remote: &[ResourceDefinition]) -> Diff {
    let mut result = Diff::default();
    let mut seen_providers: Vec<&str> = Vec::new();

    for definition in remote {
        if index.has_resource(&definition.resource_type, &definition.name) {
            result.declared.push(definition.clone());
        } else {
            result.new_resources.push(definition.clone());
        }

        let provider = definition.provider.as_str();
        if !seen_providers.contains(&provider) {
            seen_providers.push(provider);
            if !index.has_provider(provider) {
                result.new_providers.push(provider.to_string());
            }
        }
    }

    tracing::debug!(
        declared = result.declared.len(),
        new_resources = result.new_resources.len(),
        new_providers = result.new_providers.len(),
        "Computed diff"
    );
    result
}
