//! A flat-file record store: each table is a JSON array of objects kept in
//! one file, loaded whole into memory and rewritten after every change.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub mod engine;
pub mod error;
pub mod options;
pub mod query;
pub mod storage;
pub mod types;

pub use engine::Export;
pub use error::{Error, Result};
pub use options::StoreOptions;
pub use query::{Predicate, QueryBuilder, Selection};
pub use types::Record;

use storage::{DiskStorage, MemStorage};

#[derive(Debug)]
pub struct Database {
    disk: DiskStorage,
    storage: MemStorage,
    num_rows: Cell<usize>,
}

impl Database {
    /// Opens a store directory with default options, loading every table
    /// file found directly inside it. Files that do not decode as a table
    /// are skipped with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(path, StoreOptions::default())
    }

    pub fn open_with(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let disk = DiskStorage::new(path, options)?;
        let mut db = Self {
            disk,
            storage: MemStorage::new(),
            num_rows: Cell::new(0),
        };
        for table in db.disk.discover()? {
            match db.load(&table) {
                Ok(()) => {}
                Err(e @ Error::Corrupt { .. }) => {
                    warn!(table = %table, error = %e, "skipping malformed table file");
                }
                Err(e) => return Err(e),
            }
        }
        info!(
            path = %db.disk.root().display(),
            tables = db.storage.names().len(),
            "opened store"
        );
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        self.disk.root()
    }

    pub fn options(&self) -> &StoreOptions {
        self.disk.options()
    }

    /// Starts a fluent query.
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }

    /// Shorthand for `query().select(columns)`.
    pub fn select(&self, columns: &str) -> QueryBuilder<'_> {
        self.query().select(columns)
    }

    /// Shorthand for `query().from(table)`.
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        self.query().from(table)
    }

    /// Re-reads a table from disk, replacing its in-memory state.
    /// A missing file drops the table from memory.
    pub fn load(&mut self, table: &str) -> Result<()> {
        storage::validate_table_name(table)?;
        match self.disk.read_table(table)? {
            Some((rows, size)) => self.storage.set(table, rows, size),
            None => {
                self.storage.remove(table);
            }
        }
        Ok(())
    }

    /// Rewrites the table file from memory and refreshes its cached size.
    pub fn persist(&mut self, table: &str) -> Result<()> {
        let rows = self
            .storage
            .get(table)
            .ok_or_else(|| Error::not_found(table))?;
        match self.disk.write_table(table, rows) {
            Ok(size) => {
                self.storage.set_size(table, size);
                Ok(())
            }
            Err(e) => {
                warn!(table, error = %e, "persist failed, memory and disk differ until reload");
                Err(e)
            }
        }
    }

    /// Records of a loaded table.
    pub fn records(&self, table: &str) -> Option<&[Record]> {
        self.storage.get(table)
    }

    /// Loaded table names, sorted.
    pub fn tables(&self) -> Vec<String> {
        self.storage.names()
    }

    pub fn contains(&self, table: &str) -> bool {
        self.storage.contains(table)
    }

    /// Byte size of the table's last persisted form, 0 if unknown.
    pub fn size(&self, table: &str) -> u64 {
        self.storage.meta(table).map(|m| m.size).unwrap_or(0)
    }

    /// Number of records in the table, 0 if unknown.
    pub fn row_size(&self, table: &str) -> usize {
        self.storage.scan(table).len()
    }

    /// Match or affected count of the most recent query or mutation.
    pub fn num_rows(&self) -> usize {
        self.num_rows.get()
    }
}
