//! Integration tests for the canister-env binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LOCAL_IDS: &str = r#"{
  "swap_backend": {"local": "rrkah-fqaaa-aaaaa-aaaaq-cai"},
  "ledger": {"ic": "ryjl3-tyaaa-aaaaa-aaaba-cai"}
}"#;

const PROD_IDS: &str = r#"{
  "swap_backend": {"ic": "qoctq-giaaa-aaaaa-aaaea-cai"},
  "ledger": {"ic": "ryjl3-tyaaa-aaaaa-aaaba-cai"}
}"#;

fn setup_project(local: Option<&str>, production: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(content) = local {
        let dir = temp.path().join(".dfx").join("local");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("canister_ids.json"), content).unwrap();
    }
    if let Some(content) = production {
        fs::write(temp.path().join("canister_ids.json"), content).unwrap();
    }
    temp
}

fn canister_env(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("canister-env"));
    cmd.current_dir(temp.path())
        .env_remove("DFX_NETWORK")
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("canister-env"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolve the active deployment network"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("canister-env"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_resolves_local() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    canister_env(&temp)
        .assert()
        .success()
        .stdout(
            "NODE_ENV=development\nSWAP_BACKEND_CANISTER_ID=rrkah-fqaaa-aaaaa-aaaaq-cai\n",
        );
    Ok(())
}

#[test]
fn cli_missing_production_registry_warns_but_resolves_local(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    canister_env(&temp)
        .arg("resolve")
        .assert()
        .success()
        .stderr(predicate::str::contains("No production canister registry"));
    Ok(())
}

#[test]
fn cli_production_mode_uses_production_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), Some(PROD_IDS));
    canister_env(&temp)
        .env("NODE_ENV", "production")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SWAP_BACKEND_CANISTER_ID=qoctq-giaaa-aaaaa-aaaea-cai",
        ))
        .stdout(predicate::str::contains("NODE_ENV=production"));
    Ok(())
}

#[test]
fn cli_production_without_registry_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    canister_env(&temp)
        .env("NODE_ENV", "production")
        .arg("resolve")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No canister registry available"));
    Ok(())
}

#[test]
fn cli_dfx_network_overrides_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), Some(PROD_IDS));
    canister_env(&temp)
        .env("NODE_ENV", "production")
        .env("DFX_NETWORK", "local")
        .args(["resolve", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rrkah-fqaaa-aaaaa-aaaaq-cai"));
    Ok(())
}

#[test]
fn cli_shell_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    canister_env(&temp)
        .args(["resolve", "--format", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "export SWAP_BACKEND_CANISTER_ID='rrkah-fqaaa-aaaaa-aaaaq-cai'",
        ));
    Ok(())
}

#[test]
fn cli_json_format_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    let output = canister_env(&temp)
        .args(["resolve", "--format", "json", "--quiet"])
        .output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["network"], "local");
    assert_eq!(
        parsed["variables"]["SWAP_BACKEND_CANISTER_ID"],
        "rrkah-fqaaa-aaaaa-aaaaq-cai"
    );
    assert_eq!(parsed["bindings"][0]["name"], "Buffer");
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    let elsewhere = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("canister-env"));
    cmd.current_dir(elsewhere.path())
        .env_remove("DFX_NETWORK")
        .env_remove("NODE_ENV")
        .arg("--project")
        .arg(temp.path())
        .args(["resolve", "--format", "cargo"]);
    cmd.assert().success().stdout(predicate::str::contains(
        "cargo:rustc-env=SWAP_BACKEND_CANISTER_ID=rrkah-fqaaa-aaaaa-aaaaq-cai",
    ));
    Ok(())
}

#[test]
fn cli_config_file_changes_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None, None);
    fs::write(
        temp.path().join("ids.json"),
        r#"{"backend": {"mainnet": "qoctq-giaaa-aaaaa-aaaea-cai"}}"#,
    )?;
    fs::write(
        temp.path().join(".canister-env.yml"),
        "production_registry: ids.json\nproduction_network: mainnet\n",
    )?;

    canister_env(&temp)
        .env("NODE_ENV", "production")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BACKEND_CANISTER_ID=qoctq-giaaa-aaaaa-aaaea-cai",
        ));
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    fs::write(temp.path().join(".canister-env.yml"), "unknown_key: 1\n")?;
    canister_env(&temp)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_network_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    canister_env(&temp)
        .env("NODE_ENV", "production")
        .arg("network")
        .assert()
        .success()
        .stdout("ic\n");
    Ok(())
}

#[test]
fn cli_status_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(LOCAL_IDS), None);
    canister_env(&temp)
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Local registry:"))
        .stderr(predicate::str::contains("(2 canisters)"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("canister-env"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("canister-env"));
    Ok(())
}
