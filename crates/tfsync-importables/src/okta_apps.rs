//! Okta apps
//!
//! Every app is typed by its sign-on mode, the same way OneLogin apps are
//! typed by auth method.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Nesting, ScalarKind, Shape, normalize};

use crate::Result;
use crate::definition::ResourceDefinition;
use crate::importable::{Importable, not_found, requested};
use crate::kind::ResourceKind;

pub const SIGN_ON_OPENID_CONNECT: &str = "OPENID_CONNECT";
pub const SIGN_ON_SAML_2_0: &str = "SAML_2_0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OktaApp {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, alias = "signOnMode")]
    pub sign_on_mode: String,
}

impl OktaApp {
    /// Resource kind implied by the app's sign-on mode.
    pub fn kind(&self) -> ResourceKind {
        match self.sign_on_mode.as_str() {
            SIGN_ON_OPENID_CONNECT => ResourceKind::OktaAppOauth,
            SIGN_ON_SAML_2_0 => ResourceKind::OktaAppSaml,
            _ => ResourceKind::OktaAppBasicAuth,
        }
    }
}

pub trait OktaAppQuerier {
    fn list_applications(&self) -> Result<Vec<OktaApp>>;
    fn get_application(&self, id: &str) -> Result<Option<OktaApp>>;
}

pub struct OktaAppsImportable {
    kind: ResourceKind,
    service: Arc<dyn OktaAppQuerier>,
}

impl OktaAppsImportable {
    pub fn new(kind: ResourceKind, service: Arc<dyn OktaAppQuerier>) -> Self {
        Self { kind, service }
    }

    /// `okta_apps` takes every app, the typed kinds only their own.
    fn accepts(&self, app: &OktaApp) -> bool {
        self.kind == ResourceKind::OktaApps || app.kind() == self.kind
    }
}

impl Importable for OktaAppsImportable {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let apps = match requested(search_id) {
            None => {
                tracing::info!(kind = %self.kind, "Listing Okta applications");
                self.service
                    .list_applications()?
                    .into_iter()
                    .filter(|app| self.accepts(app))
                    .collect()
            }
            Some(id) => {
                tracing::info!(kind = %self.kind, id, "Fetching Okta application");
                let app = self
                    .service
                    .get_application(id)?
                    .filter(|app| self.accepts(app))
                    .ok_or_else(|| not_found(self.kind, id))?;
                vec![app]
            }
        };
        Ok(assemble(&apps))
    }
}

/// `normalize(<type>)-<id>`, typed per app.
pub fn assemble(apps: &[OktaApp]) -> Vec<ResourceDefinition> {
    apps.iter()
        .map(|app| {
            let kind = app.kind();
            let name = format!("{}-{}", normalize(kind.tag()), app.id);
            ResourceDefinition::new(kind, name, app.id.clone())
        })
        .collect()
}

pub fn okta_app_shape() -> Shape {
    Shape::new(vec![
        Field::string("label"),
        Field::string("name"),
        Field::string("status"),
        Field::string("sign_on_mode"),
        Field::list("features", ScalarKind::String),
        Field::nested(
            "accessibility",
            Shape::new(vec![
                Field::boolean("self_service"),
                Field::string("error_redirect_url"),
                Field::string("login_redirect_url"),
            ]),
            Nesting::Map,
        ),
        Field::nested(
            "visibility",
            Shape::new(vec![
                Field::boolean("auto_submit_toolbar"),
                Field::nested(
                    "hide",
                    Shape::new(vec![Field::boolean("ios"), Field::boolean("web")]),
                    Nesting::Map,
                ),
                Field::map("app_links", Nesting::Map),
            ]),
            Nesting::Map,
        ),
        Field::nested(
            "licensing",
            Shape::new(vec![Field::integer("seat_count")]),
            Nesting::Map,
        ),
        Field::map("profile", Nesting::Map),
    ])
}
