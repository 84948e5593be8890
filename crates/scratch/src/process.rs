// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! External process helpers shared by provisioning and folder opening.

use std::path::Path;
use std::process::Command;

use crate::Result;

#[cfg(test)]
#[path = "./process_test.rs"]
mod process_test;

/// Report every command in `commands` that cannot be found on PATH.
pub fn missing_commands(commands: &[&str]) -> Vec<String> {
    commands
        .iter()
        .filter(|name| which::which(name).is_err())
        .map(|name| (*name).to_string())
        .collect()
}

/// Run `program args...` to completion, with `dir` as the working directory
/// when given.
///
/// Output is captured rather than streamed; on a non-zero exit the combined
/// stdout and stderr, trimmed, travel in the returned error.
pub fn run_command(dir: Option<&Path>, program: &str, args: &[&str]) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    run(cmd, render_command(program, args))
}

/// Open `dir` with an external program taking the path as its sole
/// argument.
pub fn open_folder(program: &str, dir: &Path) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.arg(dir);
    run(cmd, format!("{} {}", program, dir.display()))
}

/// Human-readable rendering of a command line, used in error context.
pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(mut cmd: Command, rendered: String) -> Result<()> {
    let output = cmd.output().map_err(|source| crate::Error::CommandSpawn {
        command: rendered.clone(),
        source,
    })?;
    if !output.status.success() {
        return Err(crate::Error::CommandFailed {
            command: rendered,
            status: output.status,
            output: combined_output(&output.stdout, &output.stderr),
        });
    }
    Ok(())
}

fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(stderr));
    text.trim().to_string()
}
