//! Init command integration tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn shadcn_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shadcn-ext").unwrap();
    cmd.env_remove("SHADCN_EXT_REGISTRY");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn init_cmd(project: &common::TestProject) -> Command {
    let mut cmd = shadcn_cmd();
    cmd.arg("init").arg("--cwd").arg(&project.path);
    cmd
}

fn read_config(project: &common::TestProject) -> serde_json::Value {
    serde_json::from_str(&project.read_file("components.json")).unwrap()
}

#[test]
fn test_init_writes_config_and_utils() {
    let project = common::TestProject::new();

    init_cmd(&project)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote components.json"))
        .stdout(predicate::str::contains("Wrote lib/utils.ts"))
        .stdout(predicate::str::contains("clsx"))
        .stdout(predicate::str::contains("tailwind-merge"));

    let config = read_config(&project);
    assert_eq!(config["style"], "default");
    assert_eq!(config["aliases"]["components"], "components");
    assert_eq!(config["aliases"]["lib"], "lib");
    assert_eq!(config["tailwind"]["baseColor"], "slate");

    assert!(project.read_file("lib/utils.ts").contains("twMerge(clsx(inputs))"));
}

#[test]
fn test_init_detects_src_layout() {
    let project = common::TestProject::new();
    project.write_file("src/app/page.tsx", "export default function Page() {}\n");
    project.write_file("tailwind.config.js", "module.exports = {};\n");

    init_cmd(&project).arg("--yes").assert().success();

    let config = read_config(&project);
    assert_eq!(config["aliases"]["components"], "src/components");
    assert_eq!(config["aliases"]["lib"], "src/lib");
    assert_eq!(config["tailwind"]["config"], "tailwind.config.js");
    assert_eq!(config["tailwind"]["css"], "src/app/globals.css");
    assert!(project.file_exists("src/lib/utils.ts"));
}

#[test]
fn test_init_style_flag() {
    let project = common::TestProject::new();

    init_cmd(&project)
        .args(["--yes", "--style", "new-york"])
        .assert()
        .success();

    assert_eq!(read_config(&project)["style"], "new-york");
}

#[test]
fn test_init_refuses_existing_config() {
    let project = common::TestProject::with_config();
    let before = project.read_file("components.json");

    init_cmd(&project)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(project.read_file("components.json"), before);
}

#[test]
fn test_init_force_replaces_config() {
    let project = common::TestProject::new();
    project.write_file("components.json", "{}");

    init_cmd(&project)
        .args(["--yes", "--force", "--style", "new-york"])
        .assert()
        .success();

    assert_eq!(read_config(&project)["style"], "new-york");
}

#[test]
fn test_init_keeps_existing_utils() {
    let project = common::TestProject::new();
    project.write_file("lib/utils.ts", "// mine\n");

    init_cmd(&project)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept existing lib/utils.ts"));

    assert_eq!(project.read_file("lib/utils.ts"), "// mine\n");
}

#[test]
fn test_init_then_add() {
    let project = common::TestProject::new();
    let registry = project.write_registry();

    init_cmd(&project).arg("--yes").assert().success();

    shadcn_cmd()
        .args(["add", "alpha", "--cwd"])
        .arg(&project.path)
        .arg("--registry")
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("components/ui/alpha.tsx"))
        .stdout(predicate::str::contains("filesSkipped:"))
        .stdout(predicate::str::contains("lib/utils.ts"));
}
