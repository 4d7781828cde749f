//! OneLogin users

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Shape, replace_special_chars};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, not_found, parse_int_id, requested};
use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

pub trait UserQuerier {
    fn query(&self) -> Result<Vec<User>>;
    fn get_one(&self, id: i64) -> Result<Option<User>>;
}

pub struct OneloginUsersImportable {
    service: Arc<dyn UserQuerier>,
}

impl OneloginUsersImportable {
    pub fn new(service: Arc<dyn UserQuerier>) -> Self {
        Self { service }
    }
}

impl Importable for OneloginUsersImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginUsers
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let users = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting users from remote");
                self.service.query()?
            }
            Some(id) => {
                tracing::info!(%kind, id, "Collecting user from remote");
                let user = self
                    .service
                    .get_one(parse_int_id(kind, id)?)?
                    .ok_or_else(|| not_found(kind, id))?;
                vec![user]
            }
        };
        Ok(assemble(&users))
    }
}

pub fn assemble(users: &[User]) -> Vec<ResourceDefinition> {
    users
        .iter()
        .map(|user| {
            let name = format!("{}-{}", replace_special_chars(&user.email, "_"), user.id);
            ResourceDefinition::new(ResourceKind::OneloginUsers, name, user.id.to_string())
        })
        .collect()
}

pub fn user_shape() -> Shape {
    Shape::new(vec![
        Field::string("firstname"),
        Field::string("lastname"),
        Field::string("username"),
        Field::string("email"),
        Field::string("distinguished_name"),
        Field::string("samaccountname"),
        Field::string("userprincipalname"),
        Field::string("member_of"),
        Field::string("phone"),
        Field::string("title"),
        Field::string("company"),
        Field::string("department"),
        Field::string("comment"),
        Field::integer("state"),
        Field::integer("status"),
        Field::integer("invalid_login_attempts"),
        Field::integer("group_id"),
        Field::integer("directory_id"),
        Field::integer("trusted_idp_id"),
        Field::integer("manager_ad_id"),
        Field::integer("manager_user_id"),
        Field::integer("external_id"),
    ])
}
