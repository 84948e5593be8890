// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! SQLite-backed implementation of the store contract.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;
use crate::store::{StoreLister, StoreReader, StoreWriter};

#[cfg(test)]
#[path = "./sqlite_test.rs"]
mod sqlite_test;

/// Embedded registry store.
///
/// One table keyed by spec identifier; the TEXT primary key's binary
/// collation provides the ordered key enumeration the contract asks for.
/// WAL journaling with full synchronous mode makes a committed put durable
/// before the call returns.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the registry database at `path`, creating it (and its parent
    /// directory) if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                crate::Error::DirectoryCreateFailed {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }
        Self::initialize(Connection::open(path)?)
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
        conn.execute("PRAGMA synchronous=FULL;", [])?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS environments (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl StoreReader for SqliteStore {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.conn
            .query_row(
                "SELECT value FROM environments WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(|source| crate::Error::StoreFailed {
                op: "get",
                key: key.to_string(),
                source,
            })?
            .ok_or_else(|| crate::Error::NotFound {
                key: key.to_string(),
            })
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let row = self
            .conn
            .query_row(
                "SELECT 1 FROM environments WHERE key = ?1",
                params![key],
                |_| Ok(()),
            )
            .optional()
            .map_err(|source| crate::Error::StoreFailed {
                op: "exists",
                key: key.to_string(),
                source,
            })?;
        Ok(row.is_some())
    }
}

impl StoreWriter for SqliteStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO environments (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|source| crate::Error::StoreFailed {
                op: "put",
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM environments WHERE key = ?1", params![key])
            .map_err(|source| crate::Error::StoreFailed {
                op: "delete",
                key: key.to_string(),
                source,
            })?;
        if affected == 0 {
            return Err(crate::Error::NotFound {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

impl StoreLister for SqliteStore {
    fn keys(&self) -> Box<dyn Iterator<Item = Result<String>> + '_> {
        // The scan is materialized up front; each call re-scans, elements
        // carry their own errors, and a setup failure becomes the
        // sequence's only element.
        let mut stmt = match self.conn.prepare("SELECT key FROM environments ORDER BY key") {
            Ok(stmt) => stmt,
            Err(err) => return Box::new(std::iter::once(Err(err.into()))),
        };
        let rows = match stmt.query_map([], |row| row.get::<_, String>(0)) {
            Ok(rows) => rows,
            Err(err) => return Box::new(std::iter::once(Err(err.into()))),
        };
        let keys: Vec<Result<String>> = rows.map(|row| row.map_err(crate::Error::from)).collect();
        Box::new(keys.into_iter())
    }

    fn for_each(&self, visit: &mut dyn FnMut(&str, &[u8]) -> Result<()>) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM environments ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?))
        })?;
        for row in rows {
            let (key, value) = row?;
            visit(&key, &value)?;
        }
        Ok(())
    }
}
