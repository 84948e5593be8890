// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;
use crate::store::StoreReader;
use crate::store::testing::MemoryStore;

#[rstest]
fn test_new_joins_name_under_base_dir() {
    let spec = Spec::new("demo", SpecType::Python, "/envs");

    assert_eq!(spec.name, "demo");
    assert_eq!(spec.spec_type, SpecType::Python);
    assert_eq!(spec.path, PathBuf::from("/envs/demo"));
}

#[rstest]
fn test_id_combines_type_and_name() {
    let spec = Spec::new("demo", SpecType::Python, "/envs");

    assert_eq!(spec.id(), "python:demo");
    assert_eq!(spec_id(SpecType::Python, "demo"), "python:demo");
}

#[rstest]
fn test_id_keeps_colons_in_names() {
    // Names may contain the separator; the key is simply concatenated.
    assert_eq!(spec_id(SpecType::Python, "a:b"), "python:a:b");
}

#[rstest]
fn test_display_shows_name_type_and_path() {
    let spec = Spec::new("demo", SpecType::Python, "/envs");

    assert_eq!(
        spec.to_string(),
        format!("demo (python) - {}", spec.path.display())
    );
}

#[rstest]
fn test_parse_known_spec_type() {
    let parsed: SpecType = "python".parse().expect("Should parse python");
    assert_eq!(parsed, SpecType::Python);
}

#[rstest]
fn test_parse_unknown_spec_type() {
    match "ruby".parse::<SpecType>() {
        Err(crate::Error::UnknownType(name)) => assert_eq!(name, "ruby"),
        other => panic!("Expected UnknownType, got {other:?}"),
    }
}

#[rstest]
fn test_payload_roundtrip() {
    let spec = Spec::new("demo", SpecType::Python, "/envs");

    let data = spec.to_bytes().expect("Should encode spec");
    let text = String::from_utf8(data.clone()).expect("Payload should be JSON text");
    assert!(text.contains("\"type\": \"python\""));

    let decoded = Spec::from_bytes(&data).expect("Should decode spec");
    assert_eq!(decoded, spec);
}

#[rstest]
fn test_decode_tolerates_unknown_fields() {
    // Entries written by newer binaries may carry extra fields.
    let data = br#"{
        "name": "demo",
        "type": "python",
        "path": "/envs/demo",
        "created_by": "a future version"
    }"#;

    let spec = Spec::from_bytes(data).expect("Should decode payload with extra fields");
    assert_eq!(spec.name, "demo");
    assert_eq!(spec.path, PathBuf::from("/envs/demo"));
}

#[rstest]
fn test_decode_rejects_unknown_type() {
    let data = br#"{"name": "demo", "type": "ruby", "path": "/envs/demo"}"#;

    match Spec::from_bytes(data) {
        Err(crate::Error::MalformedSpec { .. }) => {}
        other => panic!("Expected MalformedSpec, got {other:?}"),
    }
}

#[rstest]
fn test_decode_rejects_garbage() {
    match Spec::from_bytes(b"not json at all") {
        Err(crate::Error::MalformedSpec { .. }) => {}
        other => panic!("Expected MalformedSpec, got {other:?}"),
    }
}

#[rstest]
fn test_exists_on_disk_tracks_directory() {
    let tmp = TempDir::new().unwrap();
    let spec = Spec::new("demo", SpecType::Python, tmp.path());

    assert!(!spec.exists_on_disk());
    std::fs::create_dir(&spec.path).unwrap();
    assert!(spec.exists_on_disk());
}

#[rstest]
fn test_save_persists_under_id() {
    let store = MemoryStore::default();
    let spec = Spec::new("demo", SpecType::Python, "/envs");

    spec.save(&store).expect("Should save spec");

    let data = store.get("python:demo").expect("Entry should be stored");
    let decoded = Spec::from_bytes(&data).expect("Stored payload should decode");
    assert_eq!(decoded, spec);
}
