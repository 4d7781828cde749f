use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tfsync_core::{ConfigResolver, SyncConfig};
use tfsync_fs::NormalizedPath;
use tfsync_test_utils::TestWorkspace;

struct Dirs {
    project: TestWorkspace,
    global: TestWorkspace,
}

#[fixture]
fn dirs() -> Dirs {
    Dirs {
        project: TestWorkspace::new(),
        global: TestWorkspace::new(),
    }
}

fn resolver(dirs: &Dirs) -> ConfigResolver {
    ConfigResolver::new(NormalizedPath::new(dirs.project.root()))
        .with_global_config_dir(dirs.global.root().to_path_buf())
}

#[rstest]
fn no_layers_yield_defaults(dirs: Dirs) {
    let config = resolver(&dirs).resolve().unwrap();
    assert_eq!(config, SyncConfig::default());
    assert_eq!(config.terraform_binary, "terraform");
    assert_eq!(config.state_file, "terraform.tfstate");
    assert!(!config.auto_approve);
}

#[rstest]
fn later_layers_override_earlier_ones(dirs: Dirs) {
    dirs.global.write(
        "config.toml",
        "[terraform]\nbinary = \"/opt/terraform\"\n\n[sync]\nauto_approve = true\n",
    );
    dirs.project.write(
        "tfsync.toml",
        "[sync]\noutput = \"main.tf\"\n\n[remote]\ninventory = \"inventory.json\"\n",
    );
    dirs.project.write("tfsync.local.toml", "[sync]\nauto_approve = false\n");

    let config = resolver(&dirs).resolve().unwrap();

    assert_eq!(
        config,
        SyncConfig {
            terraform_binary: "/opt/terraform".into(),
            state_file: "terraform.tfstate".into(),
            output: Some("main.tf".into()),
            auto_approve: false,
            inventory: Some("inventory.json".into()),
        }
    );
}

#[rstest]
fn extra_layer_is_applied_last(dirs: Dirs) {
    dirs.project.write("tfsync.toml", "[terraform]\nstate_file = \"a.tfstate\"\n");
    let extra = dirs
        .project
        .write("ci.json", r#"{"terraform": {"state_file": "ci.tfstate"}}"#);

    let config = resolver(&dirs)
        .with_extra_layer(NormalizedPath::new(extra))
        .resolve()
        .unwrap();

    assert_eq!(config.state_file, "ci.tfstate");
}

#[rstest]
fn missing_extra_layer_is_an_error(dirs: Dirs) {
    let result = resolver(&dirs)
        .with_extra_layer(NormalizedPath::new(dirs.project.path("absent.toml")))
        .resolve();

    assert!(result.is_err());
}

#[rstest]
fn invalid_layer_names_the_file(dirs: Dirs) {
    dirs.project.write("tfsync.toml", "[sync\noutput = 1\n");

    let err = resolver(&dirs).resolve().unwrap_err();

    assert!(err.to_string().contains("tfsync.toml"), "{err}");
}
