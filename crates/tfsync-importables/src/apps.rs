//! OneLogin apps, including the SAML and OIDC variants

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Nesting, Shape};

use crate::definition::ResourceDefinition;
use crate::importable::{
    Importable, action_blocks, condition_blocks, not_found, parse_int_id, requested, slug_with_id,
};
use crate::Result;
use crate::kind::ResourceKind;

pub const AUTH_METHOD_SAML: i64 = 2;
pub const AUTH_METHOD_OIDC: i64 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub auth_method: i64,
}

impl App {
    /// Resource kind implied by the app's own auth method.
    pub fn kind(&self) -> ResourceKind {
        match self.auth_method {
            AUTH_METHOD_OIDC => ResourceKind::OneloginOidcApps,
            AUTH_METHOD_SAML => ResourceKind::OneloginSamlApps,
            _ => ResourceKind::OneloginApps,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppQuery {
    pub auth_method: Option<i64>,
}

pub trait AppQuerier {
    fn query(&self, query: &AppQuery) -> Result<Vec<App>>;
    fn get_one(&self, id: i64) -> Result<Option<App>>;
}

pub struct OneloginAppsImportable {
    kind: ResourceKind,
    service: Arc<dyn AppQuerier>,
}

impl OneloginAppsImportable {
    pub fn new(kind: ResourceKind, service: Arc<dyn AppQuerier>) -> Self {
        Self { kind, service }
    }

    fn query(&self) -> AppQuery {
        let auth_method = match self.kind {
            ResourceKind::OneloginSamlApps => Some(AUTH_METHOD_SAML),
            ResourceKind::OneloginOidcApps => Some(AUTH_METHOD_OIDC),
            _ => None,
        };
        AppQuery { auth_method }
    }
}

impl Importable for OneloginAppsImportable {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let apps = match requested(search_id) {
            None => {
                tracing::info!(kind = %self.kind, "Collecting apps from remote");
                self.service.query(&self.query())?
            }
            Some(id) => {
                tracing::info!(kind = %self.kind, id, "Collecting app from remote");
                let app = self
                    .service
                    .get_one(parse_int_id(self.kind, id)?)?
                    .ok_or_else(|| not_found(self.kind, id))?;
                vec![app]
            }
        };
        Ok(assemble(&apps))
    }
}

pub fn assemble(apps: &[App]) -> Vec<ResourceDefinition> {
    apps.iter()
        .map(|app| {
            ResourceDefinition::new(app.kind(), slug_with_id(&app.name, app.id), app.id.to_string())
        })
        .collect()
}

pub fn app_shape() -> Shape {
    Shape::new(vec![
        Field::string("name"),
        Field::string("description"),
        Field::string("notes"),
        Field::integer("connector_id"),
        Field::boolean("visible"),
        Field::boolean("allow_assumed_signin"),
        Field::integer("brand_id"),
        Field::integer("policy_id"),
        Field::blocks("provisioning", Shape::new(vec![Field::boolean("enabled")])),
        Field::blocks(
            "parameters",
            Shape::new(vec![
                Field::string("param_key_name"),
                Field::string("label"),
                Field::string("user_attribute_mappings"),
                Field::string("user_attribute_macros"),
                Field::string("default_values"),
                Field::boolean("include_in_saml_assertion"),
                Field::boolean("provisioned_entitlements"),
                Field::string("values"),
            ]),
        ),
        Field::nested(
            "configuration",
            Shape::new(vec![
                Field::string("provider_arn"),
                Field::string("signature_algorithm"),
                Field::integer("certificate_id"),
                Field::string("redirect_uri"),
                Field::string("login_url"),
                Field::integer("oidc_application_type"),
                Field::integer("token_endpoint_auth_method"),
                Field::integer("access_token_expiration_minutes"),
                Field::integer("refresh_token_expiration_minutes"),
                Field::string("post_logout_redirect_uri"),
            ]),
            Nesting::Map,
        ),
        Field::blocks(
            "rules",
            Shape::new(vec![
                Field::string("name"),
                Field::string("match"),
                Field::boolean("enabled"),
                Field::integer("position"),
                condition_blocks(),
                action_blocks(true),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_app_is_typed_by_its_auth_method() {
        let apps = vec![
            App { id: 1, name: "Portal".into(), auth_method: AUTH_METHOD_OIDC },
            App { id: 2, name: "AWS Console".into(), auth_method: AUTH_METHOD_SAML },
            App { id: 3, name: "Wiki".into(), auth_method: 0 },
        ];

        let types: Vec<String> = assemble(&apps).into_iter().map(|d| d.resource_type).collect();
        assert_eq!(
            types,
            vec!["onelogin_oidc_apps", "onelogin_saml_apps", "onelogin_apps"]
        );
    }

    #[test]
    fn names_are_slugged_with_id() {
        let apps = vec![App { id: 42, name: "Sales-Force!".into(), auth_method: 0 }];
        let definitions = assemble(&apps);
        assert_eq!(definitions[0].name, "sales_force-42");
        assert_eq!(definitions[0].import_id, "42");
        assert_eq!(definitions[0].provider, "onelogin/onelogin");
    }
}
