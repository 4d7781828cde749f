//! OneLogin smart hook environment variables

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Shape, normalize, replace_special_chars};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, not_found, requested};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVar {
    pub id: String,
    pub name: String,
}

pub trait SmartHookEnvVarQuerier {
    fn query(&self) -> Result<Vec<EnvVar>>;
    fn get_one(&self, id: &str) -> Result<Option<EnvVar>>;
}

pub struct OneloginSmarthookEnvVarsImportable {
    service: Arc<dyn SmartHookEnvVarQuerier>,
}

impl OneloginSmarthookEnvVarsImportable {
    pub fn new(service: Arc<dyn SmartHookEnvVarQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for OneloginSmarthookEnvVarsImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginSmarthookEnvVars
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let vars = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting smart hook environment variables from remote");
                self.service.query()?
            }
            Some(id) => {
                tracing::info!(%kind, id, "Collecting smart hook environment variable from remote");
                let var = self.service.get_one(id)?.ok_or_else(|| not_found(kind, id))?;
                vec![var]
            }
        };

        Ok(vars
            .iter()
            .map(|var| {
                let name = normalize(&format!("{}-{}", var.name, replace_special_chars(&var.id, "")));
                ResourceDefinition::new(kind, name, var.id.clone())
            })
            .collect())
    }
}

pub fn env_var_shape() -> Shape {
    Shape::new(vec![Field::string("name"), Field::string("value")])
}
