// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
#[cfg(unix)]
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_missing_commands_reports_absent_commands() {
    let missing = missing_commands(&["scratch-test-no-such-command"]);
    assert_eq!(missing, vec!["scratch-test-no-such-command".to_string()]);
}

#[cfg(unix)]
#[rstest]
fn test_missing_commands_is_empty_when_present() {
    assert!(missing_commands(&["sh"]).is_empty());
}

#[rstest]
fn test_render_command_joins_program_and_args() {
    assert_eq!(render_command("uv", &["init"]), "uv init");
    assert_eq!(render_command("code", &[]), "code");
}

#[cfg(unix)]
#[rstest]
fn test_run_command_succeeds_on_zero_exit() {
    run_command(None, "sh", &["-c", "exit 0"]).expect("Should succeed");
}

#[cfg(unix)]
#[rstest]
fn test_run_command_uses_working_directory() {
    let tmp = TempDir::new().unwrap();

    run_command(Some(tmp.path()), "sh", &["-c", "touch marker"]).expect("Should succeed");

    assert!(tmp.path().join("marker").is_file());
}

#[cfg(unix)]
#[rstest]
fn test_run_command_failure_captures_combined_output() {
    let result = run_command(None, "sh", &["-c", "echo out; echo err >&2; exit 3"]);

    match result {
        Err(crate::Error::CommandFailed {
            command,
            status,
            output,
        }) => {
            assert!(command.starts_with("sh -c"));
            assert_eq!(status.code(), Some(3));
            assert!(output.contains("out"));
            assert!(output.contains("err"));
        }
        other => panic!("Expected CommandFailed, got {other:?}"),
    }
}

#[rstest]
fn test_run_command_reports_spawn_failure() {
    match run_command(None, "scratch-test-no-such-command", &[]) {
        Err(crate::Error::CommandSpawn { command, .. }) => {
            assert_eq!(command, "scratch-test-no-such-command");
        }
        other => panic!("Expected CommandSpawn, got {other:?}"),
    }
}

#[cfg(unix)]
#[rstest]
fn test_open_folder_passes_path_as_argument() {
    let tmp = TempDir::new().unwrap();

    open_folder("ls", tmp.path()).expect("Should list an existing directory");

    match open_folder("ls", &tmp.path().join("missing")) {
        Err(crate::Error::CommandFailed { .. }) => {}
        other => panic!("Expected CommandFailed, got {other:?}"),
    }
}
