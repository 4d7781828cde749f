//! OneLogin roles

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, ScalarKind, Shape};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, not_found, parse_int_id, requested, slug_with_id};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

pub trait RoleQuerier {
    fn query(&self) -> Result<Vec<Role>>;
    fn get_one(&self, id: i64) -> Result<Option<Role>>;
}

pub struct OneloginRolesImportable {
    service: Arc<dyn RoleQuerier>,
}

impl OneloginRolesImportable {
    pub fn new(service: Arc<dyn RoleQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for OneloginRolesImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginRoles
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let roles = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting roles from remote");
                self.service.query()?
            }
            Some(id) => {
                tracing::info!(%kind, id, "Collecting role from remote");
                let role = self
                    .service
                    .get_one(parse_int_id(kind, id)?)?
                    .ok_or_else(|| not_found(kind, id))?;
                vec![role]
            }
        };

        Ok(roles
            .iter()
            .map(|role| {
                ResourceDefinition::new(kind, slug_with_id(&role.name, role.id), role.id.to_string())
            })
            .collect())
    }
}

pub fn role_shape() -> Shape {
    Shape::new(vec![
        Field::string("name"),
        Field::list("apps", ScalarKind::Integer),
        Field::list("users", ScalarKind::Integer),
        Field::list("admins", ScalarKind::Integer),
    ])
}
