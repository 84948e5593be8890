// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Store-backed registry operations: create, list, delete.

use crate::Result;
use crate::provision::{Provision, Provisioner};
use crate::scaffold::Scaffolder;
use crate::spec::Spec;
use crate::store::Store;

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

/// Outcome of a single delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Directory and store entry are gone.
    Deleted,
    /// The confirmation hook declined; nothing was touched.
    Declined,
}

/// A stored spec paired with whether its directory is still on disk.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub spec: Spec,
    pub on_disk: bool,
}

/// The user-facing environment workflows over an explicitly provided
/// store handle.
pub struct Registry<S> {
    store: S,
}

impl<S: Store> Registry<S> {
    /// Wrap a store constructed by the caller.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create the environment described by `spec`.
    ///
    /// The registry is checked for a duplicate identifier before anything
    /// touches the filesystem, and the spec is persisted only once
    /// provisioning has succeeded; an unprovisioned environment never
    /// reaches the store.
    pub fn create(&self, spec: &Spec) -> Result<()> {
        let provisioner = Provisioner::for_spec_type(spec.spec_type);
        self.create_with(spec, &provisioner)
    }

    fn create_with(&self, spec: &Spec, provisioner: &dyn Provision) -> Result<()> {
        let id = spec.id();
        if self.store.exists(&id)? {
            return Err(crate::Error::DuplicateEnvironment { id });
        }
        Scaffolder::new(spec).build_with(provisioner)?;
        spec.save(&self.store)?;
        Ok(())
    }

    /// Decode and reconcile every registry entry.
    ///
    /// Entries whose directory has gone missing are logged and flagged
    /// rather than failing the listing; a payload that fails to decode
    /// aborts the enumeration.
    pub fn list(&self) -> Result<Vec<ListEntry>> {
        let mut entries = Vec::new();
        self.store.for_each(&mut |key, data| {
            let spec = Spec::from_bytes(data)?;
            let on_disk = spec.exists_on_disk();
            if !on_disk {
                tracing::warn!(
                    "Environment {:?} is registered but missing from {}",
                    key,
                    spec.path.display()
                );
            }
            entries.push(ListEntry { spec, on_disk });
            Ok(())
        })?;
        Ok(entries)
    }

    /// Delete the environment registered under `key`, asking `confirm`
    /// before touching anything.
    ///
    /// The directory is removed before the store entry; if the removal
    /// fails the entry stays put, so the registry keeps pointing at what
    /// is still on disk.
    pub fn delete<F>(&self, key: &str, mut confirm: F) -> Result<DeleteOutcome>
    where
        F: FnMut(&Spec) -> Result<bool>,
    {
        let data = self.store.get(key)?;
        let spec = Spec::from_bytes(&data)?;

        if !confirm(&spec)? {
            tracing::info!("Not deleting environment {}", spec.name);
            return Ok(DeleteOutcome::Declined);
        }

        if spec.exists_on_disk() {
            std::fs::remove_dir_all(&spec.path).map_err(|source| {
                crate::Error::DirectoryRemoveFailed {
                    path: spec.path.clone(),
                    source,
                }
            })?;
        }
        self.store.delete(key)?;
        tracing::info!("Deleted environment {}", spec.name);
        Ok(DeleteOutcome::Deleted)
    }

    /// Delete every registered environment.
    ///
    /// The key list is snapshotted in one pass up front, then each key goes
    /// through the single-delete procedure. The first failure aborts the
    /// remainder of the batch; declined entries are skipped and the batch
    /// continues.
    pub fn delete_all<F>(&self, mut confirm: F) -> Result<()>
    where
        F: FnMut(&Spec) -> Result<bool>,
    {
        let keys: Vec<String> = self.store.keys().collect::<Result<_>>()?;
        for key in keys {
            self.delete(&key, &mut confirm)?;
        }
        Ok(())
    }
}
