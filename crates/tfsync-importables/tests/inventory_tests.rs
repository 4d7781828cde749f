use std::fs;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tfsync_fs::NormalizedPath;
use tfsync_hcl::ShapeRegistry;
use tfsync_importables::{
    Error, ImportableRegistry, Inventory, KindShapes, RemoteServices, ResourceKind,
};

const INVENTORY_JSON: &str = r#"{
  "apps": [
    {"id": 1, "name": "Portal", "auth_method": 8},
    {"id": 2, "name": "AWS Console", "auth_method": 2},
    {"id": 3, "name": "Wiki"}
  ],
  "users": [{"id": 7, "email": "jane.doe@example.com"}],
  "roles": [{"id": 5, "name": "Admins"}],
  "app_rules": [{"id": 9, "app_id": 3, "name": "Default Rule"}],
  "smarthooks": [{"id": "hook-1", "type": "preAuthentication"}],
  "smarthook_env_vars": [{"id": "var-1", "name": "API_KEY"}],
  "iam_users": [{"user_name": "jane.doe"}],
  "okta_apps": [
    {"id": "0oa1", "label": "Portal", "signOnMode": "OPENID_CONNECT"},
    {"id": "0oa2", "label": "AWS Console", "signOnMode": "SAML_2_0"},
    {"id": "0oa3", "label": "Wiki", "signOnMode": "BASIC_AUTH"}
  ]
}"#;

#[fixture]
fn registry() -> ImportableRegistry {
    let inventory: Inventory = serde_json::from_str(INVENTORY_JSON).unwrap();
    ImportableRegistry::new(&RemoteServices::from_inventory(inventory))
}

fn names(registry: &ImportableRegistry, kind: &str, search_id: Option<&str>) -> Vec<String> {
    registry
        .importable_for(kind)
        .unwrap()
        .import_from_remote(search_id)
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect()
}

#[rstest]
fn all_apps_are_typed_individually(registry: ImportableRegistry) {
    let definitions = registry
        .importable(ResourceKind::OneloginApps)
        .import_from_remote(None)
        .unwrap();

    let types: Vec<&str> = definitions.iter().map(|d| d.resource_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["onelogin_oidc_apps", "onelogin_saml_apps", "onelogin_apps"]
    );
}

#[rstest]
fn saml_apps_filter_by_auth_method(registry: ImportableRegistry) {
    assert_eq!(
        names(&registry, "onelogin_saml_apps", None),
        vec!["aws__console-2"]
    );
}

#[rstest]
#[case::users("onelogin_users", Some("7"), "jane_doe_example_com-7")]
#[case::roles("onelogin_roles", Some("5"), "admins-5")]
#[case::app_rules("onelogin_app_rules", Some("3/9"), "default__rule-9")]
#[case::smarthooks("onelogin_smarthooks", Some("hook-1"), "pre_authentication-hook1")]
#[case::env_vars_alias("onelogin_smarthook_env_vars", Some("var-1"), "api_key-var1")]
#[case::iam("aws_iam_user", Some("jane.doe"), "jane_doe")]
#[case::okta_saml("okta_app_saml", Some("0oa2"), "okta_app_saml-0oa2")]
fn single_resource_lookup(
    registry: ImportableRegistry,
    #[case] kind: &str,
    #[case] search_id: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(names(&registry, kind, search_id), vec![expected.to_string()]);
}

#[rstest]
fn empty_search_id_means_all(registry: ImportableRegistry) {
    assert_eq!(names(&registry, "onelogin_apps", Some("")).len(), 3);
}

#[rstest]
fn missing_resource_is_an_error(registry: ImportableRegistry) {
    let result = registry
        .importable(ResourceKind::OneloginUsers)
        .import_from_remote(Some("999"));
    assert!(matches!(result, Err(Error::NotFound { search_id, .. }) if search_id == "999"));
}

#[rstest]
fn unparseable_search_id_is_an_error(registry: ImportableRegistry) {
    let result = registry
        .importable(ResourceKind::OneloginRoles)
        .import_from_remote(Some("admins"));
    assert!(matches!(result, Err(Error::InvalidSearchId { .. })));
}

#[rstest]
fn app_rule_import_id_is_app_scoped(registry: ImportableRegistry) {
    let definitions = registry
        .importable(ResourceKind::OneloginAppRules)
        .import_from_remote(None)
        .unwrap();
    assert_eq!(definitions[0].import_id, "3/9");
}

#[rstest]
fn iam_import_id_is_user_name(registry: ImportableRegistry) {
    let definitions = registry
        .importable(ResourceKind::AwsIamUser)
        .import_from_remote(None)
        .unwrap();
    assert_eq!(definitions[0].import_id, "jane.doe");
    assert_eq!(definitions[0].provider, "hashicorp/aws");
}

#[rstest]
fn okta_apps_are_typed_by_sign_on_mode(registry: ImportableRegistry) {
    let definitions = registry
        .importable(ResourceKind::OktaApps)
        .import_from_remote(None)
        .unwrap();

    let types: Vec<&str> = definitions.iter().map(|d| d.resource_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["okta_app_oauth", "okta_app_saml", "okta_app_basic_auth"]
    );
    assert_eq!(definitions[0].name, "okta_app_oauth-0oa1");
    assert_eq!(definitions[0].import_id, "0oa1");
    assert!(definitions.iter().all(|d| d.provider == "okta"));
}

#[rstest]
fn okta_typed_kinds_keep_only_their_own_apps(registry: ImportableRegistry) {
    assert_eq!(
        names(&registry, "okta_app_basic_auth", None),
        vec!["okta_app_basic_auth-0oa3"]
    );
    assert_eq!(
        names(&registry, "okta_app_oauth", None),
        vec!["okta_app_oauth-0oa1"]
    );
}

#[rstest]
fn okta_lookup_of_another_sign_on_mode_is_not_found(registry: ImportableRegistry) {
    let result = registry
        .importable(ResourceKind::OktaAppOauth)
        .import_from_remote(Some("0oa2"));
    assert!(matches!(result, Err(Error::NotFound { search_id, .. }) if search_id == "0oa2"));
}

#[test]
fn unknown_type_is_rejected_by_registry() {
    let registry = ImportableRegistry::new(&RemoteServices::from_inventory(Inventory::default()));
    assert!(matches!(
        registry.importable_for("azure_apps"),
        Err(Error::UnknownKind { .. })
    ));
}

#[test]
fn loads_toml_inventory_with_missing_sections() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("inventory.toml");
    fs::write(
        &file_path,
        "[[roles]]\nid = 1\nname = \"Readers\"\n\n[[roles]]\nid = 2\nname = \"Writers\"\n",
    )
    .unwrap();

    let inventory = Inventory::load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(inventory.roles.len(), 2);
    assert!(inventory.apps.is_empty());

    let registry = ImportableRegistry::new(&RemoteServices::from_inventory(inventory));
    assert_eq!(
        names(&registry, "onelogin_roles", None),
        vec!["readers-1", "writers-2"]
    );
}

#[test]
fn unreadable_inventory_is_a_filesystem_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.json"));
    assert!(matches!(Inventory::load(&path), Err(Error::Fs(_))));
}

#[test]
fn kind_shapes_cover_aliases_and_reject_unknown_types() {
    assert!(KindShapes.shape_for("onelogin_smarthook_env_vars").is_some());
    assert!(KindShapes.shape_for("onelogin_saml_apps").is_some());
    assert!(KindShapes.shape_for("okta_app_oauth").is_some());
    assert!(KindShapes.shape_for("azure_apps").is_none());
}
