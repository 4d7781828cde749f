//! CLI end-to-end tests that invoke the compiled `tfsync` binary against
//! temporary working directories.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tfsync_test_utils::snapshot::qualified_provider;
use tfsync_test_utils::{SnapshotBuilder, TestWorkspace};

/// A `tfsync` command running in `ws` with a clean environment.
fn tfsync(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("tfsync").expect("Failed to find tfsync binary");
    cmd.current_dir(ws.root())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", ws.path(".xdg"))
        .env_remove("TFSYNC_TERRAFORM")
        .env_remove("RUST_LOG");
    cmd
}

fn with_roles() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.write_inventory(
        "inventory.json",
        json!({"roles": [{"id": 5, "name": "Admins"}, {"id": 6, "name": "Ops"}]}),
    );
    ws
}

fn write_state(ws: &TestWorkspace) {
    let state = SnapshotBuilder::new()
        .resource(
            "onelogin_roles",
            "admins-5",
            &qualified_provider("onelogin/onelogin"),
            vec![json!({"id": "5", "name": "Admins", "users": [7]})],
        )
        .resource(
            "onelogin_roles",
            "ops-6",
            &qualified_provider("onelogin/onelogin"),
            vec![json!({"id": "6", "name": "Ops"})],
        )
        .build();
    ws.write("terraform.tfstate", &state);
}

// ============================================================================
// list-types
// ============================================================================

#[test]
fn list_types_shows_every_kind() {
    let ws = TestWorkspace::new();
    tfsync(&ws)
        .arg("list-types")
        .assert()
        .success()
        .stdout(predicate::str::contains("onelogin_apps"))
        .stdout(predicate::str::contains("aws_iam_user"))
        .stdout(predicate::str::contains("okta_app_saml"))
        .stdout(predicate::str::contains("alias: onelogin_smarthook_env_vars"));
}

// ============================================================================
// plan
// ============================================================================

#[test]
fn plan_lists_new_resources_without_writing() {
    let ws = with_roles();
    tfsync(&ws)
        .args(["plan", "onelogin_roles", "--inventory", "inventory.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 new resource(s), 1 new provider(s)"))
        .stdout(predicate::str::contains("onelogin_roles.admins-5"))
        .stdout(predicate::str::contains("provider onelogin/onelogin"));
    assert!(!ws.exists("onelogin.tf"));
}

#[test]
fn plan_with_everything_declared_reports_nothing_new() {
    let ws = with_roles();
    ws.write(
        "onelogin.tf",
        "terraform {\n\trequired_providers {\n\t\tonelogin = { source = \"onelogin/onelogin\" }\n\t}\n}\n\nresource onelogin_roles admins-5 {}\nresource onelogin_roles ops-6 {}\n",
    );
    tfsync(&ws)
        .args(["plan", "onelogin_roles", "--inventory", "inventory.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No new resources for onelogin_roles"));
}

#[test]
fn unknown_type_fails() {
    let ws = with_roles();
    tfsync(&ws)
        .args(["plan", "azure_apps", "--inventory", "inventory.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown resource type: azure_apps"));
}

#[test]
fn inventory_comes_from_project_config() {
    let ws = with_roles();
    ws.write("tfsync.toml", "[remote]\ninventory = \"inventory.json\"\n");
    tfsync(&ws)
        .args(["plan", "onelogin_roles", "--id", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new resource(s)"))
        .stdout(predicate::str::contains("onelogin_roles.ops-6"));
}

// ============================================================================
// import
// ============================================================================

#[test]
fn import_without_inventory_is_a_user_error() {
    let ws = TestWorkspace::new();
    tfsync(&ws)
        .args(["import", "onelogin_roles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No inventory configured"));
}

#[test]
fn import_dry_run_writes_nothing() {
    let ws = with_roles();
    tfsync(&ws)
        .args(["import", "onelogin_roles", "--inventory", "inventory.json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] Would declare provider onelogin/onelogin"))
        .stdout(predicate::str::contains("[dry-run] Would import onelogin_roles.admins-5 (5)"));
    assert!(!ws.exists("onelogin.tf"));
}

#[test]
fn import_without_a_terminal_cannot_confirm() {
    let ws = with_roles();
    tfsync(&ws)
        .args(["import", "onelogin_roles", "--inventory", "inventory.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confirmation failed"));
    assert!(!ws.exists("onelogin.tf"));
}

#[cfg(unix)]
#[test]
fn import_auto_approved_renders_from_state() {
    let ws = with_roles();
    write_state(&ws);

    tfsync(&ws)
        .args([
            "import",
            "onelogin_roles",
            "--inventory",
            "inventory.json",
            "--auto-approve",
            "--terraform",
            "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported onelogin_roles.ops-6 (6)"))
        .stdout(predicate::str::contains("Synchronized"));

    assert_eq!(
        ws.read("onelogin.tf"),
        "terraform {
\trequired_providers {
\t\tonelogin = { source = \"onelogin/onelogin\" }
\t}
}

resource onelogin_roles admins-5 {
\tprovider = onelogin
\tname = \"Admins\"
\tusers = [7]
}

resource onelogin_roles ops-6 {
\tprovider = onelogin
\tname = \"Ops\"
}

"
    );
}

#[cfg(unix)]
#[test]
fn failing_import_keeps_declarations() {
    let ws = with_roles();
    ws.write("tfsync.toml", "[sync]\nauto_approve = true\noutput = \"roles.tf\"\n");

    tfsync(&ws)
        .args(["import", "onelogin_roles", "--inventory", "inventory.json"])
        .env("TFSYNC_TERRAFORM", "false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with code 1"));

    ws.assert_file_contains("roles.tf", "resource onelogin_roles admins-5 {}\n");
    ws.assert_file_contains("roles.tf", "onelogin = { source = \"onelogin/onelogin\" }");
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render_requires_an_output_file() {
    let ws = TestWorkspace::new();
    write_state(&ws);
    tfsync(&ws)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No output file"));
}

#[test]
fn render_writes_the_configured_output() {
    let ws = TestWorkspace::new();
    write_state(&ws);
    ws.write("ci.toml", "[sync]\noutput = \"main.tf\"\n");

    tfsync(&ws)
        .args(["render", "--config", "ci.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered"));

    ws.assert_file_contains("main.tf", "resource onelogin_roles ops-6 {\n\tprovider = onelogin\n");
}

#[test]
fn render_diff_leaves_the_file_alone() {
    let ws = TestWorkspace::new();
    write_state(&ws);
    let original = "resource onelogin_roles admins-5 {}\n";
    ws.write("main.tf", original);

    tfsync(&ws)
        .args(["render", "--output", "main.tf", "--diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- "))
        .stdout(predicate::str::contains("-resource onelogin_roles admins-5 {}"))
        .stdout(predicate::str::contains("+\tname = \"Admins\""));

    assert_eq!(ws.read("main.tf"), original);
}

#[test]
fn render_with_missing_state_names_the_file() {
    let ws = TestWorkspace::new();
    tfsync(&ws)
        .args(["render", "--output", "main.tf", "--state", "absent.tfstate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.tfstate"));
}
