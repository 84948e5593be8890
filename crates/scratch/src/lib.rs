// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! scratch - disposable local development environment manager
//!
//! This crate provides the core library for creating, listing, and deleting
//! named throwaway development environments on a developer machine.
//!
//! # Overview
//!
//! Each environment is described by a [`Spec`] (name, type, directory) and
//! registered in a durable on-disk store under the key `type:name`. A
//! [`Scaffolder`] drives the type's [`Provisioner`] to materialize the
//! environment (for python: `uv init` followed by `uv venv`), and the
//! [`Registry`] ties spec, store, and scaffolder into the create, list, and
//! delete workflows.
//!
//! # Example
//!
//! ```text
//! $ scratch new demo
//! $ scratch list
//! demo (python) - /home/alice/.local/share/scratch/demo
//! $ scratch delete --name demo
//! Delete demo (python) - /home/alice/.local/share/scratch/demo? [y/n]: y
//! ```
//!
//! The registry database lives under the config directory and environments
//! are created under the data directory by default (see [`paths`]).

pub mod error;
pub mod paths;
pub mod process;
pub mod provision;
pub mod registry;
pub mod scaffold;
pub mod spec;
pub mod sqlite;
pub mod store;

pub use error::{Error, Result};
pub use provision::{Provision, Provisioner, PythonProvisioner};
pub use registry::{DeleteOutcome, ListEntry, Registry};
pub use scaffold::Scaffolder;
pub use spec::{Spec, SpecType, spec_id};
pub use sqlite::SqliteStore;
pub use store::{Store, StoreLister, StoreReader, StoreWriter};

/// Application name used for per-OS directory resolution.
pub const APP_NAME: &str = "scratch";

/// Well-known filename for the registry database inside the config
/// directory.
pub const REGISTRY_FILENAME: &str = "registry.db";
