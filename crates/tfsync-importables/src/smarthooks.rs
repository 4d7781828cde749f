//! OneLogin smart hooks

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Nesting, ScalarKind, Shape, normalize, replace_special_chars};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, condition_blocks, not_found, requested};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartHook {
    pub id: String,
    #[serde(rename = "type")]
    pub hook_type: String,
}

pub trait SmartHookQuerier {
    fn query(&self) -> Result<Vec<SmartHook>>;
    fn get_one(&self, id: &str) -> Result<Option<SmartHook>>;
}

pub struct OneloginSmarthooksImportable {
    service: Arc<dyn SmartHookQuerier>,
}

impl OneloginSmarthooksImportable {
    pub fn new(service: Arc<dyn SmartHookQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for OneloginSmarthooksImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginSmarthooks
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let hooks = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting smart hooks from remote");
                self.service.query()?
            }
            Some(id) => {
                tracing::info!(%kind, id, "Collecting smart hook from remote");
                let hook = self.service.get_one(id)?.ok_or_else(|| not_found(kind, id))?;
                vec![hook]
            }
        };

        Ok(hooks
            .iter()
            .map(|hook| {
                let name = normalize(&format!(
                    "{}-{}",
                    hook.hook_type,
                    replace_special_chars(&hook.id, "")
                ));
                ResourceDefinition::new(kind, name, hook.id.clone())
            })
            .collect())
    }
}

pub fn smarthook_shape() -> Shape {
    Shape::new(vec![
        Field::string("type"),
        Field::boolean("disabled"),
        Field::integer("timeout"),
        Field::list("env_vars", ScalarKind::String),
        Field::string("runtime"),
        Field::string("context_version"),
        Field::integer("retries"),
        Field::nested(
            "options",
            Shape::new(vec![
                Field::boolean("risk_enabled"),
                Field::boolean("mfa_device_info_enabled"),
                Field::boolean("location_enabled"),
            ]),
            Nesting::Block,
        ),
        Field::map("packages", Nesting::Map),
        Field::string("function"),
        Field::string("status"),
        condition_blocks(),
    ])
}
