//! Remote resource kinds for tfsync
//!
//! Every supported resource type is a [`ResourceKind`], OneLogin, AWS IAM
//! and Okta kinds alike. A kind knows its
//! provider source, the [`Shape`](tfsync_hcl::Shape) its snapshot attributes
//! are emitted with, and how to build the [`Importable`] that turns remote
//! objects into [`ResourceDefinition`]s. Remote access goes through the querier
//! traits bundled in [`RemoteServices`]; [`Inventory`] implements all of them
//! from a JSON or TOML export.

pub mod app_rules;
pub mod apps;
pub mod aws_iam_users;
pub mod definition;
pub mod error;
pub mod importable;
pub mod inventory;
pub mod kind;
pub mod okta_apps;
pub mod registry;
pub mod roles;
pub mod services;
pub mod smarthook_env_vars;
pub mod smarthooks;
pub mod user_mappings;
pub mod users;

pub use definition::ResourceDefinition;
pub use error::{Error, Result};
pub use importable::Importable;
pub use inventory::Inventory;
pub use kind::ResourceKind;
pub use registry::{ImportableRegistry, KindShapes};
pub use services::RemoteServices;
