//! Capability table of supported resource types

use std::fmt;
use std::str::FromStr;

use tfsync_hcl::Shape;

use crate::importable::Importable;
use crate::services::RemoteServices;
use crate::{Error, app_rules, apps, aws_iam_users, okta_apps, roles, smarthook_env_vars};
use crate::{smarthooks, user_mappings, users};

const ONELOGIN: &str = "onelogin/onelogin";
const AWS: &str = "hashicorp/aws";
// Okta has no namespace, so it is declared with a legacy provider block.
const OKTA: &str = "okta";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    OneloginApps,
    OneloginSamlApps,
    OneloginOidcApps,
    OneloginUsers,
    OneloginRoles,
    OneloginUserMappings,
    OneloginAppRules,
    OneloginSmarthooks,
    OneloginSmarthookEnvVars,
    AwsIamUser,
    OktaApps,
    OktaAppOauth,
    OktaAppSaml,
    OktaAppBasicAuth,
}

struct Capabilities {
    tag: &'static str,
    aliases: &'static [&'static str],
    provider: &'static str,
}

impl Capabilities {
    const fn onelogin(tag: &'static str) -> Self {
        Self {
            tag,
            aliases: &[],
            provider: ONELOGIN,
        }
    }

    const fn okta(tag: &'static str) -> Self {
        Self {
            tag,
            aliases: &[],
            provider: OKTA,
        }
    }
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 14] = [
        Self::OneloginApps,
        Self::OneloginSamlApps,
        Self::OneloginOidcApps,
        Self::OneloginUsers,
        Self::OneloginRoles,
        Self::OneloginUserMappings,
        Self::OneloginAppRules,
        Self::OneloginSmarthooks,
        Self::OneloginSmarthookEnvVars,
        Self::AwsIamUser,
        Self::OktaApps,
        Self::OktaAppOauth,
        Self::OktaAppSaml,
        Self::OktaAppBasicAuth,
    ];

    fn capabilities(self) -> Capabilities {
        match self {
            Self::OneloginApps => Capabilities::onelogin("onelogin_apps"),
            Self::OneloginSamlApps => Capabilities::onelogin("onelogin_saml_apps"),
            Self::OneloginOidcApps => Capabilities::onelogin("onelogin_oidc_apps"),
            Self::OneloginUsers => Capabilities::onelogin("onelogin_users"),
            Self::OneloginRoles => Capabilities::onelogin("onelogin_roles"),
            Self::OneloginUserMappings => Capabilities::onelogin("onelogin_user_mappings"),
            Self::OneloginAppRules => Capabilities::onelogin("onelogin_app_rules"),
            Self::OneloginSmarthooks => Capabilities::onelogin("onelogin_smarthooks"),
            Self::OneloginSmarthookEnvVars => Capabilities {
                tag: "onelogin_smarthook_environment_variables",
                aliases: &["onelogin_smarthook_env_vars"],
                provider: ONELOGIN,
            },
            Self::AwsIamUser => Capabilities {
                tag: "aws_iam_user",
                aliases: &[],
                provider: AWS,
            },
            Self::OktaApps => Capabilities::okta("okta_apps"),
            Self::OktaAppOauth => Capabilities::okta("okta_app_oauth"),
            Self::OktaAppSaml => Capabilities::okta("okta_app_saml"),
            Self::OktaAppBasicAuth => Capabilities::okta("okta_app_basic_auth"),
        }
    }

    /// Resource type name as written in configuration text.
    pub fn tag(self) -> &'static str {
        self.capabilities().tag
    }

    /// Alternative names accepted on the command line.
    pub fn aliases(self) -> &'static [&'static str] {
        self.capabilities().aliases
    }

    /// Provider source, `<namespace>/<name>`.
    pub fn provider(self) -> &'static str {
        self.capabilities().provider
    }

    /// Local provider name, the last segment of the source.
    pub fn provider_local_name(self) -> &'static str {
        let provider = self.provider();
        provider.rsplit('/').next().unwrap_or(provider)
    }

    /// Shape used to emit snapshot attributes of this type.
    pub fn shape(self) -> Shape {
        match self {
            Self::OneloginApps | Self::OneloginSamlApps | Self::OneloginOidcApps => {
                apps::app_shape()
            }
            Self::OneloginUsers => users::user_shape(),
            Self::OneloginRoles => roles::role_shape(),
            Self::OneloginUserMappings => user_mappings::user_mapping_shape(),
            Self::OneloginAppRules => app_rules::app_rule_shape(),
            Self::OneloginSmarthooks => smarthooks::smarthook_shape(),
            Self::OneloginSmarthookEnvVars => smarthook_env_vars::env_var_shape(),
            Self::AwsIamUser => aws_iam_users::iam_user_shape(),
            Self::OktaApps | Self::OktaAppOauth | Self::OktaAppSaml | Self::OktaAppBasicAuth => {
                okta_apps::okta_app_shape()
            }
        }
    }

    /// Build the importable for this kind over the given remote services.
    pub fn importable(self, services: &RemoteServices) -> Box<dyn Importable> {
        match self {
            Self::OneloginApps | Self::OneloginSamlApps | Self::OneloginOidcApps => Box::new(
                apps::OneloginAppsImportable::new(self, services.apps.clone()),
            ),
            Self::OneloginUsers => Box::new(users::OneloginUsersImportable::new(
                services.users.clone(),
            )),
            Self::OneloginRoles => Box::new(roles::OneloginRolesImportable::new(
                services.roles.clone(),
            )),
            Self::OneloginUserMappings => Box::new(
                user_mappings::OneloginUserMappingsImportable::new(services.user_mappings.clone()),
            ),
            Self::OneloginAppRules => Box::new(app_rules::OneloginAppRulesImportable::new(
                services.app_rules.clone(),
            )),
            Self::OneloginSmarthooks => Box::new(smarthooks::OneloginSmarthooksImportable::new(
                services.smarthooks.clone(),
            )),
            Self::OneloginSmarthookEnvVars => Box::new(
                smarthook_env_vars::OneloginSmarthookEnvVarsImportable::new(
                    services.smarthook_env_vars.clone(),
                ),
            ),
            Self::AwsIamUser => Box::new(aws_iam_users::AwsIamUsersImportable::new(
                services.iam_users.clone(),
            )),
            Self::OktaApps | Self::OktaAppOauth | Self::OktaAppSaml | Self::OktaAppBasicAuth => {
                Box::new(okta_apps::OktaAppsImportable::new(
                    self,
                    services.okta_apps.clone(),
                ))
            }
        }
    }

    /// Resource type prefix up to the first `_`, e.g. `onelogin`.
    pub fn file_prefix(self) -> &'static str {
        let tag = self.tag();
        tag.split('_').next().unwrap_or(tag)
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s || kind.aliases().contains(&s))
            .ok_or_else(|| Error::UnknownKind {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
