//! Integration tests for config handling (CLI)

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{ansihtml, fixtures_dir};

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    ansihtml(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("escape_html = true"))
        .stdout(predicate::str::contains("title = \"Log\""));
}

#[test]
fn config_path_points_into_config_dir() {
    let home = TempDir::new().unwrap();
    ansihtml(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");

    ansihtml(home.path())
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    ansihtml(home.path())
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    ansihtml(home.path())
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();
}

// `dirs::config_dir` honours XDG_CONFIG_HOME only on Linux.
#[test]
#[cfg(target_os = "linux")]
fn default_config_location_is_used_by_render() {
    let home = TempDir::new().unwrap();

    ansihtml(home.path())
        .args(["config", "init"])
        .assert()
        .success();

    let path_output = ansihtml(home.path())
        .args(["config", "path"])
        .output()
        .unwrap();
    let path = String::from_utf8(path_output.stdout).unwrap();
    std::fs::write(path.trim(), "[render]\nescape_html = false\n").unwrap();

    ansihtml(home.path())
        .arg("render")
        .write_stdin("<i>\n")
        .assert()
        .success()
        .stdout("<i>\n");
}

#[test]
fn config_file_settings_apply_to_render() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[render]\nlinkify = false\n").unwrap();

    ansihtml(home.path())
        .arg("render")
        .arg("--config")
        .arg(&path)
        .write_stdin("http://x.test & co\n")
        .assert()
        .success()
        .stdout("http://x.test &amp; co\n");
}

#[test]
fn invalid_config_fails_render() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[render\n").unwrap();

    ansihtml(home.path())
        .arg("render")
        .arg(fixtures_dir().join("sample.log"))
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}
