use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use tfsync_core::declare::with_declarations;
use tfsync_core::diff;
use tfsync_hcl::{DefinitionIndex, DefinitionKind, scan};
use tfsync_importables::ResourceDefinition;

fn definition(provider: &str, resource_type: &str, name: &str, import_id: &str) -> ResourceDefinition {
    ResourceDefinition {
        provider: provider.to_string(),
        resource_type: resource_type.to_string(),
        name: name.to_string(),
        import_id: import_id.to_string(),
    }
}

fn arb_definition() -> impl Strategy<Value = ResourceDefinition> {
    ("[a-c]/[a-c]", "t_[a-c]", "n-[0-9]").prop_map(|(provider, resource_type, name)| {
        definition(&provider, &resource_type, &name, "1")
    })
}

fn index_of(definitions: &[ResourceDefinition]) -> DefinitionIndex {
    let mut index = DefinitionIndex::new();
    for d in definitions {
        index.record(DefinitionKind::Provider, d.provider.clone());
        index.record(DefinitionKind::Resource, d.address());
    }
    index
}

proptest! {
    #[test]
    fn fully_declared_remote_has_empty_diff(remote in prop::collection::vec(arb_definition(), 0..12)) {
        let result = diff(&index_of(&remote), &remote);
        prop_assert!(result.new_resources.is_empty());
        prop_assert!(result.new_providers.is_empty());
    }

    #[test]
    fn every_definition_lands_in_exactly_one_side(
        declared in prop::collection::vec(arb_definition(), 0..8),
        remote in prop::collection::vec(arb_definition(), 0..12),
    ) {
        let index = index_of(&declared);
        let result = diff(&index, &remote);

        prop_assert_eq!(result.declared.len() + result.new_resources.len(), remote.len());
        for d in &result.declared {
            prop_assert!(index.has_resource(&d.resource_type, &d.name));
        }
        for d in &result.new_resources {
            prop_assert!(!index.has_resource(&d.resource_type, &d.name));
        }
    }

    #[test]
    fn new_resources_keep_remote_order(remote in prop::collection::vec(arb_definition(), 0..12)) {
        let result = diff(&DefinitionIndex::new(), &remote);
        prop_assert_eq!(result.new_resources, remote);
    }
}

#[test]
fn undeclared_duplicate_appears_twice() {
    let d = definition("p/p", "t", "n-1", "1");
    let result = diff(&DefinitionIndex::new(), &[d.clone(), d.clone()]);
    assert_eq!(result.new_resources, vec![d.clone(), d]);
    assert_eq!(result.new_providers, vec!["p/p"]);
}

#[test]
fn empty_file_gets_provider_block_and_resource_line() {
    let d = definition("p/p", "t", "n-1", "1");
    let index = scan("".as_bytes()).unwrap();

    let result = diff(&index, std::slice::from_ref(&d));
    assert_eq!(result.new_resources, vec![d]);
    assert_eq!(result.new_providers, vec!["p/p"]);

    let text = with_declarations("", &result);
    assert_eq!(
        text,
        "terraform {\n\trequired_providers {\n\t\tp = { source = \"p/p\" }\n\t}\n}\n\nresource t n-1 {}\n"
    );

    let rescanned = scan(text.as_bytes()).unwrap();
    assert!(rescanned.has_provider("p/p"));
    assert!(rescanned.has_resource("t", "n-1"));
}

#[test]
fn new_provider_joins_existing_required_providers() {
    let existing = "\
terraform {
\trequired_providers {
\t\tonelogin = { source = \"onelogin/onelogin\" }
\t}
}

resource onelogin_users jane-7 {}
";
    let index = scan(existing.as_bytes()).unwrap();
    let remote = vec![
        definition("onelogin/onelogin", "onelogin_users", "jane-7", "7"),
        definition("hashicorp/aws", "aws_iam_user", "jane", "jane"),
    ];

    let result = diff(&index, &remote);
    assert_eq!(result.new_providers, vec!["hashicorp/aws"]);

    let text = with_declarations(existing, &result);
    assert_eq!(
        text,
        "\
terraform {
\trequired_providers {
\t\taws = { source = \"hashicorp/aws\" }
\t\tonelogin = { source = \"onelogin/onelogin\" }
\t}
}

resource onelogin_users jane-7 {}

resource aws_iam_user jane {}
"
    );
    let rescanned = scan(text.as_bytes()).unwrap();
    assert_eq!(rescanned.distinct(DefinitionKind::Provider), 2);
}

#[test]
fn provider_without_namespace_gets_legacy_block() {
    let result = diff(&DefinitionIndex::new(), &[definition("onelogin", "t", "n", "1")]);

    let text = with_declarations("resource x y {}", &result);
    assert_eq!(
        text,
        "resource x y {}\n\nprovider onelogin {\n\talias = \"onelogin\"\n}\n\nresource t n {}\n"
    );
}

#[rstest]
#[case::filled(
    "terraform {\n  required_providers { onelogin = { source = \"onelogin/onelogin\" } }\n}\n",
    "terraform {\n  required_providers {\n  \taws = { source = \"hashicorp/aws\" }\n  \tonelogin = { source = \"onelogin/onelogin\" }\n  }\n}\n"
)]
#[case::empty(
    "terraform {\n\trequired_providers {}\n}\n",
    "terraform {\n\trequired_providers {\n\t\taws = { source = \"hashicorp/aws\" }\n\t}\n}\n"
)]
#[case::entry_opened_on_header(
    "required_providers { onelogin = {\n\tsource = \"onelogin/onelogin\"\n}\n}\n",
    "required_providers {\n\taws = { source = \"hashicorp/aws\" }\n\tonelogin = {\n\tsource = \"onelogin/onelogin\"\n}\n}\n"
)]
fn new_provider_joins_one_line_required_providers(#[case] existing: &str, #[case] declared: &str) {
    let index = scan(existing.as_bytes()).unwrap();
    let remote = vec![definition("hashicorp/aws", "aws_iam_user", "jane", "jane")];

    let result = diff(&index, &remote);
    let text = with_declarations(existing, &result);

    assert_eq!(text, format!("{declared}\nresource aws_iam_user jane {{}}\n"));
    assert_eq!(text.matches("required_providers").count(), 1);
    let rescanned = scan(text.as_bytes()).unwrap();
    assert!(rescanned.has_provider("hashicorp/aws"));
}
