// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Provisioning backends, one per environment type.

use std::path::Path;

use crate::spec::SpecType;
use crate::{Result, paths, process};

#[cfg(test)]
#[path = "./provision_test.rs"]
mod provision_test;

/// Two-phase capability contract every backend implements.
pub trait Provision {
    /// Verify the backend's external dependencies, reporting every missing
    /// command at once rather than stopping at the first.
    fn ready(&self) -> Result<()>;

    /// Materialize a fresh environment at `target_dir`.
    fn provision(&self, target_dir: &Path) -> Result<()>;
}

/// External commands the python backend shells out to.
const PYTHON_REQUIRED_COMMANDS: &[&str] = &["uv"];

/// Python environments bootstrapped with `uv`: a project manifest from
/// `uv init` followed by an isolated virtual environment from `uv venv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonProvisioner;

impl Provision for PythonProvisioner {
    fn ready(&self) -> Result<()> {
        let missing = process::missing_commands(PYTHON_REQUIRED_COMMANDS);
        if !missing.is_empty() {
            return Err(crate::Error::MissingDependencies { commands: missing });
        }
        Ok(())
    }

    fn provision(&self, target_dir: &Path) -> Result<()> {
        paths::ensure_directory(target_dir)?;
        bootstrap(target_dir, "uv", &["init"])?;
        bootstrap(target_dir, "uv", &["venv"])?;
        tracing::info!("Created environment at {}", target_dir.display());
        Ok(())
    }
}

/// Run one bootstrap step inside the target directory.
fn bootstrap(target_dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    process::run_command(Some(target_dir), program, args).map_err(|source| {
        crate::Error::ProvisioningFailed {
            command: process::render_command(program, args),
            source: Box::new(source),
        }
    })
}

/// Closed, type-keyed dispatch over the provisioning backends.
///
/// New environment types plug in here with one new variant; the scaffolder
/// and registry are untouched.
#[derive(Debug, Clone, Copy)]
pub enum Provisioner {
    Python(PythonProvisioner),
}

impl Provisioner {
    /// Select the backend for an environment type.
    pub fn for_spec_type(spec_type: SpecType) -> Self {
        match spec_type {
            SpecType::Python => Self::Python(PythonProvisioner),
        }
    }
}

impl Provision for Provisioner {
    fn ready(&self) -> Result<()> {
        match self {
            Self::Python(backend) => backend.ready(),
        }
    }

    fn provision(&self, target_dir: &Path) -> Result<()> {
        match self {
            Self::Python(backend) => backend.provision(target_dir),
        }
    }
}
