//! Integration tests for loading and scaffolding `apidoc.json`
//!
//! These tests verify:
//! - Fail-fast validation order and field attribution
//! - Output directory creation during load
//! - Round-tripping a loaded configuration
//! - Scaffolding from directory inspection

use apidoc::diagnostics::MemorySink;
use apidoc::{Config, ConfigError, Diagnostics, generate_config, load_config};
use camino::{Utf8Path, Utf8PathBuf};
use proptest::prelude::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

fn write_config(root: &Utf8Path, value: serde_json::Value) -> Utf8PathBuf {
    let path = root.join("apidoc.json");
    fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();
    path
}

fn valid_config(root: &Utf8Path) -> serde_json::Value {
    serde_json::json!({
        "version": "1.2.3",
        "inputs": [
            { "dir": root.as_str(), "recursive": true, "lang": "go" }
        ],
        "output": { "type": "html", "dir": root.join("doc").as_str() }
    })
}

fn field_of(err: ConfigError) -> String {
    err.field()
        .map(str::to_string)
        .unwrap_or_else(|| panic!("expected field error, got: {}", err))
}

#[test]
fn test_load_valid_config() {
    let (_temp_dir, root) = create_test_dir();
    let path = write_config(&root, valid_config(&root));

    let config = load_config(&path, &Diagnostics::console()).unwrap();

    assert_eq!(config.version, "1.2.3");
    assert_eq!(config.inputs.len(), 1);
    assert_eq!(config.inputs[0].exts, vec![".go".to_string()]);
    assert!(config.inputs[0].syntax_log.is_some());
    assert!(root.join("doc").is_dir());
}

#[test]
fn test_round_trip_after_load() {
    let (_temp_dir, root) = create_test_dir();
    let path = write_config(&root, valid_config(&root));

    let config = load_config(&path, &Diagnostics::console()).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let reparsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(reparsed.version, config.version);
    assert_eq!(reparsed.inputs.len(), config.inputs.len());
    assert_eq!(
        reparsed.output().unwrap().dir,
        config.output().unwrap().dir
    );
}

#[test]
fn test_empty_inputs_rejected() {
    let (_temp_dir, root) = create_test_dir();
    let mut value = valid_config(&root);
    value["inputs"] = serde_json::json!([]);
    let path = write_config(&root, value);

    let err = load_config(&path, &Diagnostics::console()).unwrap_err();
    assert_eq!(field_of(err), "inputs");
}

#[test]
fn test_empty_inputs_rejected_even_without_output() {
    let (_temp_dir, root) = create_test_dir();
    let path = write_config(&root, serde_json::json!({ "version": "1.0.0", "inputs": [] }));

    let err = load_config(&path, &Diagnostics::console()).unwrap_err();
    assert_eq!(field_of(err), "inputs");
}

#[test]
fn test_missing_output_rejected() {
    let (_temp_dir, root) = create_test_dir();
    let mut value = valid_config(&root);
    value["output"] = serde_json::Value::Null;
    let path = write_config(&root, value);

    let err = load_config(&path, &Diagnostics::console()).unwrap_err();
    assert_eq!(field_of(err), "output");
}

#[test]
fn test_empty_output_dir_rejected() {
    let (_temp_dir, root) = create_test_dir();
    let mut value = valid_config(&root);
    value["output"]["dir"] = serde_json::json!("");
    let path = write_config(&root, value);

    let err = load_config(&path, &Diagnostics::console()).unwrap_err();
    assert_eq!(field_of(err), "dir");
}

#[test]
fn test_invalid_versions_rejected() {
    let (_temp_dir, root) = create_test_dir();

    for version in ["v1", "", "1.0", "1", "1.0.0.0", "01.0.0"] {
        let mut value = valid_config(&root);
        value["version"] = serde_json::json!(version);
        let path = write_config(&root, value);

        let err = load_config(&path, &Diagnostics::console()).unwrap_err();
        assert_eq!(field_of(err), "version", "version {:?}", version);
    }
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let (_temp_dir, root) = create_test_dir();
    let path = write_config(&root, serde_json::json!({ "version": 1, "inputs": "src" }));

    let err = load_config(&path, &Diagnostics::console()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {}", err);
}

#[test]
fn test_load_does_not_touch_config_file() {
    let (_temp_dir, root) = create_test_dir();
    let path = write_config(&root, valid_config(&root));
    let before = fs::read(&path).unwrap();

    load_config(&path, &Diagnostics::console()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_generate_config() {
    let (_temp_dir, root) = create_test_dir();
    let proj = root.join("proj");
    fs::create_dir_all(proj.join("handlers")).unwrap();
    fs::write(proj.join("main.go"), "package main").unwrap();
    fs::write(proj.join("handlers/users.go"), "package handlers").unwrap();

    let path = proj.join("apidoc.json");
    generate_config(&path, &Diagnostics::console()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\n    \"version\""));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["version"], apidoc::VERSION);
    assert_eq!(value["inputs"][0]["dir"], proj.as_str());
    assert_eq!(value["inputs"][0]["recursive"], true);
    assert_eq!(value["inputs"][0]["lang"], "go");
    assert_eq!(value["output"]["type"], "html");
    assert_eq!(value["output"]["dir"], proj.join("doc").as_str());
}

#[test]
fn test_generated_config_loads() {
    let (_temp_dir, root) = create_test_dir();
    fs::write(root.join("lib.rs"), "").unwrap();
    let path = root.join("apidoc.json");

    generate_config(&path, &Diagnostics::console()).unwrap();
    let config = load_config(&path, &Diagnostics::console()).unwrap();

    assert_eq!(config.inputs[0].lang, "rust");
    assert!(root.join("doc").is_dir());
}

#[test]
fn test_generate_without_sources_warns() {
    let (_temp_dir, root) = create_test_dir();
    let sink = Arc::new(MemorySink::new());
    let path = root.join("apidoc.json");

    generate_config(&path, &Diagnostics::new(sink.clone())).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["inputs"][0]["lang"], "");
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_generate_overwrites_existing_file() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("apidoc.json");
    fs::write(&path, "x".repeat(4096)).unwrap();

    generate_config(&path, &Diagnostics::console()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&written).is_ok());
}

#[test]
fn test_generate_into_missing_dir_is_io_error() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("missing").join("apidoc.json");

    let err = generate_config(&path, &Diagnostics::console()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_non_semver_version_rejected(version in "[a-z]{0,3}[0-9]{0,2}(\\.[0-9]{1,2})?") {
        let (_temp_dir, root) = create_test_dir();
        let mut value = valid_config(&root);
        value["version"] = serde_json::json!(version);
        let path = write_config(&root, value);

        let err = load_config(&path, &Diagnostics::console()).unwrap_err();
        prop_assert_eq!(field_of(err), "version");
    }

    #[test]
    fn prop_empty_inputs_always_rejected(
        version in "[1-9][0-9]?\\.(0|[1-9])\\.(0|[1-9][0-9]?)",
        with_output in any::<bool>(),
    ) {
        let (_temp_dir, root) = create_test_dir();
        let mut value = serde_json::json!({ "version": version, "inputs": [] });
        if with_output {
            value["output"] = serde_json::json!({ "type": "json", "dir": root.join("doc").as_str() });
        }
        let path = write_config(&root, value);

        let err = load_config(&path, &Diagnostics::console()).unwrap_err();
        prop_assert_eq!(field_of(err), "inputs");
    }
}
