//! AWS IAM users

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Nesting, Shape, replace_special_chars};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, not_found, requested};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamUser {
    pub user_name: String,
    #[serde(default)]
    pub path: Option<String>,
}

pub trait IamUserQuerier {
    fn list_users(&self) -> Result<Vec<IamUser>>;
    fn get_user(&self, user_name: &str) -> Result<Option<IamUser>>;
}

pub struct AwsIamUsersImportable {
    service: Arc<dyn IamUserQuerier>,
}

impl AwsIamUsersImportable {
    pub fn new(service: Arc<dyn IamUserQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for AwsIamUsersImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::AwsIamUser
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let users = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Listing IAM users");
                self.service.list_users()?
            }
            Some(user_name) => {
                tracing::info!(%kind, user_name, "Fetching IAM user");
                let user = self
                    .service
                    .get_user(user_name)?
                    .ok_or_else(|| not_found(kind, user_name))?;
                vec![user]
            }
        };

        Ok(users
            .iter()
            .map(|user| {
                ResourceDefinition::new(
                    kind,
                    replace_special_chars(&user.user_name, "_"),
                    user.user_name.clone(),
                )
            })
            .collect())
    }
}

pub fn iam_user_shape() -> Shape {
    Shape::new(vec![
        Field::string("name"),
        Field::string("path"),
        Field::string("permissions_boundary"),
        Field::boolean("force_destroy"),
        Field::map("tags", Nesting::Map),
    ])
}
