use pretty_assertions::assert_eq;
use rstest::rstest;
use tfsync_hcl::{DefinitionKind, scan};

#[rstest]
#[case::bare_labels("resource onelogin_apps my_app-12 {}\n", "onelogin_apps.my_app-12")]
#[case::quoted_labels("resource \"aws_iam_user\" \"jane\" {\n", "aws_iam_user.jane")]
#[case::leading_whitespace("\t  resource t n-1 {\n", "t.n-1")]
#[case::no_space_before_brace("resource t n{\n", "t.n")]
#[case::no_trailing_newline("resource t n {}", "t.n")]
fn recognizes_resource_headers(#[case] text: &str, #[case] key: &str) {
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.count(DefinitionKind::Resource, key), 1);
}

#[rstest]
#[case::commented("# resource t n {}\n")]
#[case::attribute("\tname = \"resource t n {\"\n")]
#[case::missing_brace("resource t n\n")]
#[case::data_source("data t n {\n")]
fn ignores_non_headers(#[case] text: &str) {
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.distinct(DefinitionKind::Resource), 0);
}

#[test]
fn counts_inline_provider_requirements() {
    let text = "terraform {\n\trequired_providers {\n\t\tonelogin = { source = \"onelogin/onelogin\" }\n\t\taws = { source = \"registry.terraform.io/hashicorp/aws\", version = \"~> 5.0\" }\n\t}\n}\n";
    let index = scan(text.as_bytes()).unwrap();

    assert!(index.has_provider("onelogin/onelogin"));
    assert!(index.has_provider("hashicorp/aws"));
    assert_eq!(index.distinct(DefinitionKind::Provider), 2);
}

#[test]
fn counts_multi_line_provider_requirements() {
    let text = r#"terraform {
  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }
  }
}

resource aws_iam_user jane {}
"#;
    let index = scan(text.as_bytes()).unwrap();

    assert!(index.has_provider("hashicorp/aws"));
    assert!(index.has_resource("aws_iam_user", "jane"));
}

#[test]
fn source_lines_outside_required_providers_are_ignored() {
    let text = "module \"x\" {\n\tsource = \"hashicorp/aws\"\n}\nonelogin = { source = \"onelogin/onelogin\" }\n";
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.distinct(DefinitionKind::Provider), 0);
}

#[test]
fn legacy_provider_block_counts_alias() {
    let text = "provider onelogin {\n\talias = \"onelogin\"\n}\n";
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.count(DefinitionKind::Provider, "onelogin"), 1);
}

#[test]
fn duplicates_increment_the_same_counter() {
    let text = "resource t n {}\nresource t n {\n}\nprovider p {}\nprovider \"p\" {}\n";
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.count(DefinitionKind::Resource, "t.n"), 2);
    assert_eq!(index.count(DefinitionKind::Provider, "p"), 2);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let mut bytes = b"# caf\xe9\n".to_vec();
    bytes.extend_from_slice(b"resource t n {}\n");
    let index = scan(bytes.as_slice()).unwrap();
    assert!(index.has_resource("t", "n"));
}

#[test]
fn empty_input_has_no_declarations() {
    let index = scan(&b""[..]).unwrap();
    assert_eq!(index.distinct(DefinitionKind::Resource), 0);
    assert_eq!(index.distinct(DefinitionKind::Provider), 0);
}

#[rstest]
#[case::single_entry("required_providers { onelogin = { source = \"onelogin/onelogin\" } }\n", 1)]
#[case::two_entries(
    "required_providers { onelogin = { source = \"onelogin/onelogin\" }, aws = { source = \"hashicorp/aws\" } }\n",
    2
)]
#[case::entry_opening_on_header(
    "required_providers { aws = {\n\tsource = \"hashicorp/aws\"\n}\n}\nonelogin = { source = \"onelogin/onelogin\" }\n",
    1
)]
fn counts_requirements_on_the_opening_line(#[case] text: &str, #[case] providers: usize) {
    let index = scan(text.as_bytes()).unwrap();
    assert_eq!(index.distinct(DefinitionKind::Provider), providers);
}

#[test]
fn one_line_block_does_not_swallow_following_lines() {
    let text = "required_providers { onelogin = { source = \"onelogin/onelogin\" } }\nresource t n {}\n";
    let index = scan(text.as_bytes()).unwrap();
    assert!(index.has_provider("onelogin/onelogin"));
    assert!(index.has_resource("t", "n"));
}
