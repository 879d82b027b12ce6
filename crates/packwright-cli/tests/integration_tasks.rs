//! Integration tests for the packwright tasks.
//!
//! These tests spawn the real binary and assert on the emitted JSON, so they
//! cover the whole pipeline: flag parsing, override layering, variant
//! composition, and delivery on stdout or `--out`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn packwright() -> Command {
    let mut cmd = Command::cargo_bin("packwright").unwrap();
    // keep the host environment from leaking overrides into the tests
    cmd.env_remove("PACKWRIGHT_BUILD__EXTRACT_CSS");
    cmd.env_remove("PACKWRIGHT_BUILD__MAIN");
    cmd
}

/// A minimal project checkout: src/ with app and spec tsconfigs.
fn project_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("tsconfig.app.json"),
        r#"{ "compilerOptions": { "target": "es5" } }"#,
    )
    .unwrap();
    fs::write(
        src.join("tsconfig.spec.json"),
        r#"{ "compilerOptions": { "target": "es5" } }"#,
    )
    .unwrap();
    temp
}

fn compose(args: &[&str], temp: &TempDir) -> Value {
    let output = packwright()
        .current_dir(temp.path())
        .args(args)
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("stdout should be one JSON document")
}

#[test]
fn bare_invocation_prints_the_guidance_banner() {
    packwright()
        .assert()
        .success()
        .stdout(predicate::str::contains("=== PACKWRIGHT ==="))
        .stdout(predicate::str::contains("Default packwright tasks."))
        .stdout(predicate::str::contains("Run packwright help"))
        .stdout(predicate::str::contains("to find out the runnable tasks"));
}

#[test]
fn build_emits_the_jit_production_configuration() {
    let temp = project_fixture();
    let config = compose(&["build"], &temp);

    assert_eq!(config["mode"], "production");
    assert_eq!(config["entry"]["main"][0], "./main.ts");
    assert_eq!(config["entry"]["polyfills"][0], "./polyfills.ts");
    assert_eq!(config["entry"]["styles"][0], "./styles.scss");

    // production defaults turn extraction and hashing on
    let plugins = config["plugins"].as_array().unwrap();
    let extract = plugins
        .iter()
        .find(|plugin| plugin["plugin"] == "mini-css-extract-plugin")
        .expect("extraction plugin requested");
    assert_eq!(extract["options"]["filename"], "[name].[contenthash:20].css");
}

#[test]
fn aot_switch_routes_templates_through_the_angular_compiler() {
    let temp = project_fixture();
    let jit = compose(&["build"], &temp);
    let aot = compose(&["build", "--aot"], &temp);

    let loaders = |config: &Value| -> Vec<String> {
        config["module"]["rules"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|rule| rule["use"].as_array().cloned().unwrap_or_default())
            .map(|entry| entry["loader"].as_str().unwrap().to_string())
            .collect()
    };

    assert!(loaders(&jit).iter().any(|loader| loader == "ts-loader"));
    assert!(loaders(&aot).iter().any(|loader| loader == "@ngtools/webpack"));
    assert!(aot["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .any(|plugin| plugin["plugin"] == "@ngtools/webpack.AngularCompilerPlugin"));
}

#[test]
fn serve_emits_the_dev_server_block() {
    let temp = project_fixture();
    let config = compose(&["serve"], &temp);

    assert_eq!(config["mode"], "development");
    assert_eq!(config["devServer"]["host"], "localhost");
    assert_eq!(config["devServer"]["port"], 4200);
    assert_eq!(config["devServer"]["publicPath"], "/");
    assert_eq!(config["devServer"]["historyApiFallback"], true);
    assert_eq!(config["devServer"]["https"], false);
    assert_eq!(config["devServer"]["hot"], false);
    // development defaults keep styles injected
    assert!(config["plugins"]
        .as_array()
        .map(|plugins| plugins
            .iter()
            .all(|plugin| plugin["plugin"] != "mini-css-extract-plugin"))
        .unwrap_or(true));
}

#[test]
fn test_task_pins_the_spec_entry_and_tsconfig() {
    let temp = project_fixture();
    // the variant discards caller overrides for both pinned fields
    let config = compose(&["test", "--main", "./elsewhere.ts"], &temp);

    assert_eq!(config["entry"]["main"][0], "./test.ts");
    let text = serde_json::to_string(&config).unwrap();
    assert!(text.contains("tsconfig.spec.json"));
    assert!(!text.contains("elsewhere.ts"));
    assert!(config.get("devServer").is_none());
}

#[test]
fn flags_override_the_file_which_overrides_the_variant() {
    let temp = project_fixture();
    fs::write(
        temp.path().join("packwright.toml"),
        r#"
            [build]
            extract_css = false
            deploy_path = "/from-file/"
        "#,
    )
    .unwrap();

    // the file layer turns extraction off even for the production variant
    let from_file = compose(&["build"], &temp);
    assert!(from_file["plugins"]
        .as_array()
        .map(|plugins| plugins
            .iter()
            .all(|plugin| plugin["plugin"] != "mini-css-extract-plugin"))
        .unwrap_or(true));

    // a flag wins back over the file
    let from_flag = compose(&["build", "--extract-css=true"], &temp);
    assert!(from_flag["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .any(|plugin| plugin["plugin"] == "mini-css-extract-plugin"));
}

#[test]
fn environment_variables_sit_between_file_and_flags() {
    let temp = project_fixture();
    let output = packwright()
        .current_dir(temp.path())
        .env("PACKWRIGHT_BUILD__MAIN", "./from-env.ts")
        .args(["build", "--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let config: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(config["entry"]["main"][0], "./from-env.ts");

    let output = packwright()
        .current_dir(temp.path())
        .env("PACKWRIGHT_BUILD__MAIN", "./from-env.ts")
        .args([
            "build",
            "--main",
            "./from-flag.ts",
            "--root",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let config: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(config["entry"]["main"][0], "./from-flag.ts");
}

#[test]
fn out_flag_writes_the_file_and_keeps_stdout_clean() {
    let temp = project_fixture();
    let destination = temp.path().join("webpack.config.json");

    packwright()
        .current_dir(temp.path())
        .args([
            "build",
            "--root",
            temp.path().to_str().unwrap(),
            "--out",
            destination.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(written["mode"], "production");
}

#[test]
fn unwritable_out_path_fails_with_the_destination_in_the_message() {
    let temp = project_fixture();
    packwright()
        .current_dir(temp.path())
        .args([
            "build",
            "--root",
            temp.path().to_str().unwrap(),
            "--out",
            "no-such-dir/webpack.config.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn es2015_tsconfig_switches_the_resolved_main_fields() {
    let temp = project_fixture();
    fs::write(
        temp.path().join("src/tsconfig.app.json"),
        r#"{ "compilerOptions": { "target": "es2015" } }"#,
    )
    .unwrap();

    let config = compose(&["build"], &temp);
    let main_fields = config["resolve"]["mainFields"].as_array().unwrap();
    assert!(main_fields.iter().any(|field| field == "es2015"));
}
