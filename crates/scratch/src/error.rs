// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for scratch operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::spec::SpecType;

/// Convenience Result type with scratch Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during scratch operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Environment type is not a known provisioner variant
    #[error("Unknown environment type {0:?}")]
    #[diagnostic(
        code(scratch::unknown_type),
        help("Supported types: python")
    )]
    UnknownType(String),

    /// Required external commands are missing from PATH
    #[error("Missing required commands: {}", commands.join(", "))]
    #[diagnostic(
        code(scratch::missing_commands),
        help("Install the missing commands and re-run")
    )]
    MissingDependencies { commands: Vec<String> },

    /// Provisioner cannot run in the current environment
    #[error("Provisioner for {spec_type} environments is not ready")]
    #[diagnostic(code(scratch::not_ready))]
    NotReady {
        spec_type: SpecType,
        #[source]
        source: Box<Error>,
    },

    /// Target directory is already present on disk
    #[error("Environment already exists at {path:?}")]
    #[diagnostic(
        code(scratch::already_exists),
        help("Choose a different name or delete the existing environment first")
    )]
    AlreadyExists { path: PathBuf },

    /// A registry entry with the same identifier exists
    #[error("Environment {id:?} is already registered")]
    #[diagnostic(
        code(scratch::duplicate_environment),
        help("Run 'scratch list' to inspect it or 'scratch delete' to remove it")
    )]
    DuplicateEnvironment { id: String },

    /// Failed to create the environment directory tree
    #[error("Failed to create directory {path:?}")]
    #[diagnostic(code(scratch::directory_create_failed))]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove an environment directory
    #[error("Failed to remove directory {path:?}")]
    #[diagnostic(code(scratch::directory_remove_failed))]
    DirectoryRemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External command could not be started
    #[error("Failed to launch {command:?}")]
    #[diagnostic(code(scratch::command_spawn))]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command ran and exited with a failure status
    #[error("{command:?} failed with {status}: {output}")]
    #[diagnostic(code(scratch::command_failed))]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        output: String,
    },

    /// The bootstrap tool failed partway through provisioning
    #[error("Provisioning failed while running {command:?}")]
    #[diagnostic(
        code(scratch::provisioning_failed),
        help("The target directory is left as-is; inspect or remove it before retrying")
    )]
    ProvisioningFailed {
        command: String,
        #[source]
        source: Box<Error>,
    },

    /// Store key is absent
    #[error("No environment registered under {key:?}")]
    #[diagnostic(
        code(scratch::not_found),
        help("Run 'scratch list' to see registered environments")
    )]
    NotFound { key: String },

    /// Stored payload could not be decoded
    #[error("Malformed environment spec in registry")]
    #[diagnostic(code(scratch::malformed_spec))]
    MalformedSpec {
        #[source]
        source: serde_json::Error,
    },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(scratch::validation_failed))]
    ValidationFailed(String),

    /// Storage engine failure during a keyed operation
    #[error("Store {op} failed for key {key:?}")]
    #[diagnostic(code(scratch::store_failed))]
    StoreFailed {
        op: &'static str,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Storage engine passthrough
    #[error(transparent)]
    #[diagnostic(code(scratch::sqlite_error))]
    Sqlite(#[from] rusqlite::Error),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(scratch::io_error))]
    Io(#[from] std::io::Error),
}
