//! Lookup of importables and shapes by resource type

use tfsync_hcl::{Shape, ShapeRegistry};

use crate::importable::Importable;
use crate::kind::ResourceKind;
use crate::services::RemoteServices;
use crate::Result;

/// Builds importables for any kind over one set of remote services.
#[derive(Debug, Clone)]
pub struct ImportableRegistry {
    services: RemoteServices,
}

impl ImportableRegistry {
    pub fn new(services: &RemoteServices) -> Self {
        Self {
            services: services.clone(),
        }
    }

    pub fn importable(&self, kind: ResourceKind) -> Box<dyn Importable> {
        tracing::debug!(%kind, "Creating importable");
        kind.importable(&self.services)
    }

    /// Resolve a type name or alias, then build its importable.
    pub fn importable_for(&self, resource_type: &str) -> Result<Box<dyn Importable>> {
        let kind: ResourceKind = resource_type.parse()?;
        Ok(self.importable(kind))
    }
}

/// Shapes of every built-in kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindShapes;

impl ShapeRegistry for KindShapes {
    fn shape_for(&self, resource_type: &str) -> Option<Shape> {
        resource_type
            .parse::<ResourceKind>()
            .ok()
            .map(ResourceKind::shape)
    }
}
