//! The bundle of remote collaborators handed to importables

use std::sync::Arc;

use crate::app_rules::AppRuleQuerier;
use crate::apps::AppQuerier;
use crate::aws_iam_users::IamUserQuerier;
use crate::inventory::Inventory;
use crate::okta_apps::OktaAppQuerier;
use crate::roles::RoleQuerier;
use crate::smarthook_env_vars::SmartHookEnvVarQuerier;
use crate::smarthooks::SmartHookQuerier;
use crate::user_mappings::UserMappingQuerier;
use crate::users::UserQuerier;

/// One querier per remote service, built once per run.
#[derive(Clone)]
pub struct RemoteServices {
    pub apps: Arc<dyn AppQuerier>,
    pub users: Arc<dyn UserQuerier>,
    pub roles: Arc<dyn RoleQuerier>,
    pub user_mappings: Arc<dyn UserMappingQuerier>,
    pub app_rules: Arc<dyn AppRuleQuerier>,
    pub smarthooks: Arc<dyn SmartHookQuerier>,
    pub smarthook_env_vars: Arc<dyn SmartHookEnvVarQuerier>,
    pub iam_users: Arc<dyn IamUserQuerier>,
    pub okta_apps: Arc<dyn OktaAppQuerier>,
}

impl RemoteServices {
    /// Serve every kind from one inventory.
    pub fn from_inventory(inventory: Inventory) -> Self {
        let inventory = Arc::new(inventory);
        Self {
            apps: inventory.clone(),
            users: inventory.clone(),
            roles: inventory.clone(),
            user_mappings: inventory.clone(),
            app_rules: inventory.clone(),
            smarthooks: inventory.clone(),
            smarthook_env_vars: inventory.clone(),
            iam_users: inventory.clone(),
            okta_apps: inventory,
        }
    }
}

impl std::fmt::Debug for RemoteServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteServices").finish_non_exhaustive()
    }
}
