// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn flags() -> CmdDelete {
    CmdDelete {
        id: None,
        name: None,
        spec_type: "python".to_string(),
        all: false,
        force: false,
    }
}

#[rstest]
fn test_target_requires_a_selector() {
    match flags().target() {
        Err(scratch::Error::ValidationFailed(_)) => {}
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}

#[rstest]
fn test_target_uses_id_verbatim() {
    let mut cmd = flags();
    cmd.id = Some("python:demo".to_string());

    assert_eq!(
        cmd.target().expect("Should resolve"),
        Target::Key("python:demo".to_string())
    );
}

#[rstest]
fn test_target_builds_key_from_name_and_type() {
    let mut cmd = flags();
    cmd.name = Some("demo".to_string());

    assert_eq!(
        cmd.target().expect("Should resolve"),
        Target::Key("python:demo".to_string())
    );
}

#[rstest]
fn test_target_rejects_unknown_type() {
    let mut cmd = flags();
    cmd.name = Some("demo".to_string());
    cmd.spec_type = "ruby".to_string();

    match cmd.target() {
        Err(scratch::Error::UnknownType(name)) => assert_eq!(name, "ruby"),
        other => panic!("Expected UnknownType, got {other:?}"),
    }
}

#[rstest]
fn test_target_rejects_id_combined_with_name() {
    let mut cmd = flags();
    cmd.id = Some("python:demo".to_string());
    cmd.name = Some("demo".to_string());

    match cmd.target() {
        Err(scratch::Error::ValidationFailed(_)) => {}
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}

#[rstest]
fn test_target_all() {
    let mut cmd = flags();
    cmd.all = true;

    assert_eq!(cmd.target().expect("Should resolve"), Target::All);
}

#[rstest]
fn test_target_rejects_all_combined_with_selector() {
    let mut cmd = flags();
    cmd.all = true;
    cmd.id = Some("python:demo".to_string());

    match cmd.target() {
        Err(scratch::Error::ValidationFailed(_)) => {}
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}
