//! Offline subcommands: `templar repos` and `templar render`.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn templar() -> Command {
    Command::cargo_bin("templar").expect("templar binary")
}

fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("templar.json"),
        r#"{
            "repositories": [
                {"owner": "atlauncher", "repo": "meta", "updateTemplateFiles": true},
                {"owner": "atlauncher", "repo": "wiki", "updateTemplateFiles": false}
            ],
            "templateFiles": ["LICENSE.md"]
        }"#,
    )
    .unwrap();
    std::fs::create_dir_all(dir.join("templates")).unwrap();
    std::fs::write(
        dir.join("templates").join("LICENSE.md"),
        "Copyright {{ year }}\n",
    )
    .unwrap();
}

#[test]
fn repos_lists_configured_repositories() {
    let cwd = TempDir::new().unwrap();
    write_fixture(cwd.path());
    templar()
        .current_dir(cwd.path())
        .args(["repos", "--config", "templar.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("atlauncher/meta"))
        .stdout(predicate::str::contains("atlauncher/wiki"))
        .stdout(predicate::str::contains("LICENSE.md"));
}

#[test]
fn repos_json_is_machine_readable() {
    let cwd = TempDir::new().unwrap();
    write_fixture(cwd.path());
    let output = templar()
        .current_dir(cwd.path())
        .args(["repos", "--config", "templar.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(payload["branch"], "master");
    assert_eq!(payload["repositories"][0]["owner"], "atlauncher");
    assert_eq!(payload["repositories"][1]["update_template_files"], false);
}

#[test]
fn render_substitutes_the_year() {
    let cwd = TempDir::new().unwrap();
    write_fixture(cwd.path());
    templar()
        .current_dir(cwd.path())
        .args(["render", "LICENSE.md", "--year", "2015", "--config", "templar.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright 2015"));
}

#[test]
fn render_unknown_template_fails_with_name() {
    let cwd = TempDir::new().unwrap();
    write_fixture(cwd.path());
    templar()
        .current_dir(cwd.path())
        .args(["render", "MISSING.md", "--year", "2015", "--config", "templar.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MISSING.md"))
        .stderr(predicate::str::contains("loaded templates"))
        .stderr(predicate::str::contains("LICENSE.md"));
}

#[test]
fn repos_with_malformed_config_fails_with_path() {
    let cwd = TempDir::new().unwrap();
    std::fs::write(cwd.path().join("templar.json"), "{not json").unwrap();
    templar()
        .current_dir(cwd.path())
        .args(["repos", "--config", "templar.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("templar.json"));
}
