//! OneLogin user mappings

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Shape};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{
    Importable, action_blocks, condition_blocks, not_found, parse_int_id, requested, slug_with_id,
};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMapping {
    pub id: i64,
    pub name: String,
}

pub trait UserMappingQuerier {
    fn query(&self) -> Result<Vec<UserMapping>>;
    fn get_one(&self, id: i64) -> Result<Option<UserMapping>>;
}

pub struct OneloginUserMappingsImportable {
    service: Arc<dyn UserMappingQuerier>,
}

impl OneloginUserMappingsImportable {
    pub fn new(service: Arc<dyn UserMappingQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for OneloginUserMappingsImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginUserMappings
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let mappings = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting user mappings from remote");
                self.service.query()?
            }
            Some(id) => {
                tracing::info!(%kind, id, "Collecting user mapping from remote");
                let mapping = self
                    .service
                    .get_one(parse_int_id(kind, id)?)?
                    .ok_or_else(|| not_found(kind, id))?;
                vec![mapping]
            }
        };

        Ok(mappings
            .iter()
            .map(|m| ResourceDefinition::new(kind, slug_with_id(&m.name, m.id), m.id.to_string()))
            .collect())
    }
}

pub fn user_mapping_shape() -> Shape {
    Shape::new(vec![
        Field::string("name"),
        Field::string("match"),
        Field::integer("position"),
        Field::boolean("enabled"),
        condition_blocks(),
        action_blocks(false),
    ])
}
