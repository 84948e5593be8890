// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Durable key-value contract backing the environment registry.
//!
//! The registry only ever talks to these traits; the concrete engine lives
//! in [`crate::sqlite`]. Keys are spec identifiers (`type:name`), values are
//! opaque payload bytes the store never inspects.

use crate::Result;

#[cfg(test)]
#[path = "./store_test.rs"]
mod store_test;

/// Read half of the store contract.
pub trait StoreReader {
    /// Fetch the payload stored under `key`.
    ///
    /// Fails with `NotFound` when absent. The returned bytes are an
    /// independent copy; callers may mutate them freely.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Whether `key` is present.
    ///
    /// Absence is not an error; only a genuine engine failure is.
    fn exists(&self, key: &str) -> Result<bool>;
}

/// Write half of the store contract.
pub trait StoreWriter {
    /// Insert or replace the payload under `key`.
    ///
    /// The write is durable before this returns; a crash immediately after
    /// a successful put never loses the entry.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove the entry under `key`, failing with `NotFound` when absent.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Enumeration half of the store contract.
pub trait StoreLister {
    /// Enumerate every key in ascending byte order.
    ///
    /// The sequence is finite and restartable (each call re-scans from the
    /// beginning). Elements carry their own errors so one unreadable record
    /// does not hide the rest, and the caller may drop the iterator early.
    fn keys(&self) -> Box<dyn Iterator<Item = Result<String>> + '_>;

    /// Visit every entry with its payload, in key order, stopping at and
    /// propagating the first handler error.
    fn for_each(&self, visit: &mut dyn FnMut(&str, &[u8]) -> Result<()>) -> Result<()>;
}

/// Full store contract.
pub trait Store: StoreReader + StoreWriter + StoreLister {}

impl<T: StoreReader + StoreWriter + StoreLister> Store for T {}
