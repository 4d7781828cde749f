//! File-backed remote inventory
//!
//! An inventory is a JSON or TOML export of remote objects:
//! ```toml
//! [[apps]]
//! id = 1
//! name = "Portal"
//! auth_method = 8
//!
//! [[iam_users]]
//! user_name = "jane"
//!
//! [[okta_apps]]
//! id = "0oa1"
//! sign_on_mode = "SAML_2_0"
//! ```
//! Every section is optional.

use serde::{Deserialize, Serialize};
use tfsync_fs::{ConfigStore, NormalizedPath};

use crate::Result;
use crate::app_rules::{AppRule, AppRuleQuerier};
use crate::apps::{App, AppQuerier, AppQuery};
use crate::aws_iam_users::{IamUser, IamUserQuerier};
use crate::okta_apps::{OktaApp, OktaAppQuerier};
use crate::roles::{Role, RoleQuerier};
use crate::smarthook_env_vars::{EnvVar, SmartHookEnvVarQuerier};
use crate::smarthooks::{SmartHook, SmartHookQuerier};
use crate::user_mappings::{UserMapping, UserMappingQuerier};
use crate::users::{User, UserQuerier};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub apps: Vec<App>,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub user_mappings: Vec<UserMapping>,
    pub app_rules: Vec<AppRule>,
    pub smarthooks: Vec<SmartHook>,
    pub smarthook_env_vars: Vec<EnvVar>,
    pub iam_users: Vec<IamUser>,
    pub okta_apps: Vec<OktaApp>,
}

impl Inventory {
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let inventory: Self = ConfigStore::new().load(path)?;
        tracing::debug!(
            path = %path,
            apps = inventory.apps.len(),
            users = inventory.users.len(),
            roles = inventory.roles.len(),
            "Loaded inventory"
        );
        Ok(inventory)
    }
}

impl AppQuerier for Inventory {
    fn query(&self, query: &AppQuery) -> Result<Vec<App>> {
        Ok(self
            .apps
            .iter()
            .filter(|app| query.auth_method.is_none_or(|method| app.auth_method == method))
            .cloned()
            .collect())
    }

    fn get_one(&self, id: i64) -> Result<Option<App>> {
        Ok(self.apps.iter().find(|app| app.id == id).cloned())
    }
}

impl UserQuerier for Inventory {
    fn query(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn get_one(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}

impl RoleQuerier for Inventory {
    fn query(&self) -> Result<Vec<Role>> {
        Ok(self.roles.clone())
    }

    fn get_one(&self, id: i64) -> Result<Option<Role>> {
        Ok(self.roles.iter().find(|role| role.id == id).cloned())
    }
}

impl UserMappingQuerier for Inventory {
    fn query(&self) -> Result<Vec<UserMapping>> {
        Ok(self.user_mappings.clone())
    }

    fn get_one(&self, id: i64) -> Result<Option<UserMapping>> {
        Ok(self.user_mappings.iter().find(|m| m.id == id).cloned())
    }
}

impl AppRuleQuerier for Inventory {
    fn query(&self) -> Result<Vec<AppRule>> {
        Ok(self.app_rules.clone())
    }

    fn get_one(&self, app_id: i64, id: i64) -> Result<Option<AppRule>> {
        Ok(self
            .app_rules
            .iter()
            .find(|rule| rule.app_id == app_id && rule.id == id)
            .cloned())
    }
}

impl SmartHookQuerier for Inventory {
    fn query(&self) -> Result<Vec<SmartHook>> {
        Ok(self.smarthooks.clone())
    }

    fn get_one(&self, id: &str) -> Result<Option<SmartHook>> {
        Ok(self.smarthooks.iter().find(|hook| hook.id == id).cloned())
    }
}

impl SmartHookEnvVarQuerier for Inventory {
    fn query(&self) -> Result<Vec<EnvVar>> {
        Ok(self.smarthook_env_vars.clone())
    }

    fn get_one(&self, id: &str) -> Result<Option<EnvVar>> {
        Ok(self.smarthook_env_vars.iter().find(|var| var.id == id).cloned())
    }
}

impl IamUserQuerier for Inventory {
    fn list_users(&self) -> Result<Vec<IamUser>> {
        Ok(self.iam_users.clone())
    }

    fn get_user(&self, user_name: &str) -> Result<Option<IamUser>> {
        Ok(self
            .iam_users
            .iter()
            .find(|user| user.user_name == user_name)
            .cloned())
    }
}

impl OktaAppQuerier for Inventory {
    fn list_applications(&self) -> Result<Vec<OktaApp>> {
        Ok(self.okta_apps.clone())
    }

    fn get_application(&self, id: &str) -> Result<Option<OktaApp>> {
        Ok(self.okta_apps.iter().find(|app| app.id == id).cloned())
    }
}
