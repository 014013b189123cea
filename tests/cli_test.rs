//! Integration tests for the cmdmenu binary.
//!
//! The binary's stdout is a pipe here, so every run uses the
//! non-interactive UI and takes its answers from `CMDMENU_PROMPT_*`.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".cmdmenu");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("commands.yml"), manifest).unwrap();
    temp
}

/// A `cmdmenu` invocation isolated from the caller's environment.
fn cmdmenu(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("cmdmenu"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("CMDMENU_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

const MANIFEST: &str = r#"
settings:
  env:
    APP_ENV: testing
commands:
  - name: db:seed
    description: Seed database
    run: echo seeding ${class}
    arguments:
      - name: class
        description: Seeder class
        default: DatabaseSeeder
    options:
      - name: force
        shortcut: f
        description: Skip confirmation
  - name: db:wipe
    description: Wipe database
    run: echo wiped
  - name: cache:clear
    description: Clear cache
    run: echo cleared in $APP_ENV
  - name: broken:exit
    description: Exits with 3
    run: exit 3
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmdmenu(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cmdmenu"))
        .stdout(predicate::str::contains("completions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmdmenu(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn runs_chosen_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "wipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiped"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn arguments_and_options_reach_the_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "seed")
        .env("CMDMENU_PROMPT_ARG_CLASS", "UserSeeder")
        .env("CMDMENU_PROMPT_OPTIONS", "-f")
        .assert()
        .success()
        .stdout(predicate::str::contains("seeding UserSeeder --force"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn empty_argument_uses_command_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("seeding DatabaseSeeder"))
        .stdout(predicate::str::contains("may or may not be optional"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn manifest_env_is_exported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "cache")
        .env("CMDMENU_PROMPT_COMMAND", "clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared in testing"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn exit_code_is_propagated() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "broken")
        .env("CMDMENU_PROMPT_COMMAND", "exit")
        .assert()
        .code(3);
    Ok(())
}

#[cfg(unix)]
#[test]
fn runs_from_nested_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let nested = temp.path().join("app").join("models");
    fs::create_dir_all(&nested)?;

    cmdmenu(&nested)
        .env("HOME", temp.path().join("app"))
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "wipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiped"));
    Ok(())
}

#[test]
fn unknown_group_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "queue")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'queue' is not one of the offered choices"));
    Ok(())
}

#[test]
fn unanswered_menu_names_the_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CMDMENU_PROMPT_GROUP"));
    Ok(())
}

#[test]
fn undeclared_option_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "seed")
        .env("CMDMENU_PROMPT_OPTIONS", "--queue=emails")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"--queue\" option does not exist"));
    Ok(())
}

#[test]
fn missing_manifest_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmdmenu(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command registry unavailable"));
    Ok(())
}

#[test]
fn invalid_manifest_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("commands:\n  - name: db:seed\n    run: a\n  - name: db:seed\n    run: b\n");
    cmdmenu(temp.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("db:seed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn config_flag_and_env_select_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("menu.yml");
    fs::write(&path, MANIFEST)?;

    cmdmenu(temp.path())
        .arg("--config")
        .arg(&path)
        .env("CMDMENU_PROMPT_GROUP", "db")
        .env("CMDMENU_PROMPT_COMMAND", "wipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiped"));

    cmdmenu(temp.path())
        .env("CMDMENU_CONFIG", &path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("db:wipe"));
    Ok(())
}

#[test]
fn list_shows_grouped_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("cache:clear"))
        .stdout(predicate::str::contains("Seed database"));
    Ok(())
}

#[test]
fn list_quiet_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    cmdmenu(temp.path())
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmdmenu(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmdmenu"));
    Ok(())
}
