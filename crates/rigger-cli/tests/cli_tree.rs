use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn rigger_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rigger").unwrap();
    cmd.env("RIGGER_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn project(fixture: &str) -> TempDir {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(fixture);
    let tmp = TempDir::new().unwrap();
    fs::copy(src, tmp.path().join("Rigger.toml")).unwrap();
    tmp
}

#[test]
fn test_tree_shows_policy_marks() {
    let tmp = project("libtorrent-node.toml");

    rigger_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("libtorrent-node\n"))
        .stdout(predicate::str::contains("Libtorrent [static, fPIC]"))
        .stdout(predicate::str::contains("zlib [static]"));
}

#[test]
fn test_tree_depth_limit() {
    let tmp = project("libtorrent-node.toml");

    rigger_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["tree", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Libtorrent"))
        .stdout(predicate::str::contains("Boost").not());
}

#[test]
fn test_tree_why_lists_dependents() {
    let tmp = project("libtorrent-node.toml");

    rigger_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["tree", "--why", "zlib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib is required by:\n  Boost"));
}

#[test]
fn test_tree_why_root_is_top_level() {
    let tmp = project("libtorrent-node.toml");

    rigger_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["tree", "--why", "libtorrent-node"])
        .assert()
        .success()
        .stdout(predicate::str::contains("libtorrent-node is a top-level package."));
}

#[test]
fn test_tree_why_unknown_package() {
    let tmp = project("libtorrent-node.toml");

    rigger_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["tree", "--why", "leveldb"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Package 'leveldb' is not declared in libtorrent-node v0.1.0.",
        ));
}
