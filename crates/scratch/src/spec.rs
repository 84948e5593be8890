// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Environment spec data types and their persisted encoding.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::StoreWriter;

#[cfg(test)]
#[path = "./spec_test.rs"]
mod spec_test;

/// The set of environment types with a provisioning backend.
///
/// Adding a type means adding a variant here and a matching arm in
/// [`crate::provision::Provisioner::for_spec_type`]; nothing else changes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpecType {
    Python,
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => f.write_str("python"),
        }
    }
}

impl FromStr for SpecType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "python" => Ok(Self::Python),
            other => Err(crate::Error::UnknownType(other.to_string())),
        }
    }
}

/// Compute the registry key for an environment of the given type and name.
///
/// The key is `type:name`. Names may themselves contain `:`, so the key is
/// only reversible by splitting on the first colon; this ambiguity is
/// accepted and relied upon nowhere.
pub fn spec_id(spec_type: SpecType, name: &str) -> String {
    format!("{spec_type}:{name}")
}

/// Identity record for one environment.
///
/// Constructed when a create request is issued and persisted only after
/// provisioning succeeds. The `path` is fixed at construction as
/// `base_dir/name` and stored verbatim; moving the directory on disk without
/// updating the registry desynchronizes the two.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Spec {
    /// User-chosen environment name.
    pub name: String,

    /// Environment type, selecting the provisioning backend.
    #[serde(rename = "type")]
    pub spec_type: SpecType,

    /// Absolute path of the environment directory.
    pub path: PathBuf,
}

impl Spec {
    /// Build a spec for `name` rooted under `base_dir`.
    pub fn new<S: Into<String>, P: AsRef<Path>>(name: S, spec_type: SpecType, base_dir: P) -> Self {
        let name = name.into();
        let path = base_dir.as_ref().join(&name);
        Self {
            name,
            spec_type,
            path,
        }
    }

    /// Registry key for this spec (see [`spec_id`]).
    pub fn id(&self) -> String {
        spec_id(self.spec_type, &self.name)
    }

    /// Whether the environment directory is present on disk.
    ///
    /// Any stat failure, including permission errors, reads as "not
    /// present"; callers cannot distinguish a missing directory from an
    /// inaccessible one through this check.
    pub fn exists_on_disk(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }

    /// Encode to the persisted payload (pretty-printed JSON).
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|source| crate::Error::MalformedSpec { source })
    }

    /// Decode a persisted payload.
    ///
    /// Unknown fields in the payload are tolerated so older binaries can
    /// read entries written by newer ones; an unrecognized `type` value is
    /// rejected.
    pub fn from_bytes(data: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(data).map_err(|source| crate::Error::MalformedSpec { source })
    }

    /// Persist this spec into the store under its registry key.
    pub fn save<W: StoreWriter + ?Sized>(&self, store: &W) -> crate::Result<()> {
        let data = self.to_bytes()?;
        store.put(&self.id(), &data)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}",
            self.name,
            self.spec_type,
            self.path.display()
        )
    }
}
