// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! The provisioning state machine.

use crate::Result;
use crate::provision::{Provision, Provisioner};
use crate::spec::Spec;

#[cfg(test)]
#[path = "./scaffold_test.rs"]
mod scaffold_test;

/// Drives one provisioning attempt for a spec.
///
/// Steps run in a fixed order: select the backend, check its readiness,
/// check the target path is free, create the directory tree, provision.
/// Each failure is terminal for the attempt, nothing is retried, and
/// nothing is rolled back; a provisioning failure leaves the created
/// directory behind for the user to inspect or remove.
#[derive(Debug)]
pub struct Scaffolder<'a> {
    spec: &'a Spec,
}

impl<'a> Scaffolder<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    /// Run the full attempt with the backend selected by the spec's type.
    pub fn build(&self) -> Result<()> {
        let provisioner = Provisioner::for_spec_type(self.spec.spec_type);
        self.build_with(&provisioner)
    }

    pub(crate) fn build_with(&self, provisioner: &dyn Provision) -> Result<()> {
        tracing::debug!("Checking provisioner readiness");
        provisioner
            .ready()
            .map_err(|source| crate::Error::NotReady {
                spec_type: self.spec.spec_type,
                source: Box::new(source),
            })?;

        tracing::debug!("Checking the target path is free");
        // Advisory only: another process can take the path between this
        // check and the create below.
        if self.spec.exists_on_disk() {
            return Err(crate::Error::AlreadyExists {
                path: self.spec.path.clone(),
            });
        }

        tracing::debug!("Creating the environment directory");
        crate::paths::ensure_directory(&self.spec.path)?;

        tracing::debug!("Provisioning the environment");
        provisioner.provision(&self.spec.path)
    }
}
