use tracing::info;

use crate::Database;
use crate::error::{Error, Result};
use crate::storage::validate_table_name;

impl Database {
    /// Creates an empty table file and loads it. An existing file that
    /// already holds a table is loaded untouched.
    pub fn create(&mut self, table: &str) -> Result<()> {
        validate_table_name(table)?;
        if self.disk.exists(table) {
            return match self.disk.read_table(table) {
                Ok(Some((rows, size))) => {
                    self.storage.set(table, rows, size);
                    info!(table, "table already exists, loaded");
                    Ok(())
                }
                Ok(None) => self.create_empty(table),
                Err(Error::Corrupt { .. }) => Err(Error::TableExists {
                    table: table.to_string(),
                }),
                Err(e) => Err(e),
            };
        }
        self.create_empty(table)
    }

    fn create_empty(&mut self, table: &str) -> Result<()> {
        self.disk.create_file(table)?;
        self.load(table)?;
        info!(table, "created table");
        Ok(())
    }

    /// Removes the table file and its in-memory state.
    pub fn drop(&mut self, table: &str) -> Result<()> {
        self.require(table)?;
        self.disk.remove_file(table)?;
        self.storage.remove(table);
        info!(table, "dropped table");
        Ok(())
    }

    /// Empties the table and persists.
    pub fn truncate(&mut self, table: &str) -> Result<()> {
        self.require(table)?;
        if let Some(rows) = self.storage.scan_mut(table) {
            rows.clear();
        }
        self.persist(table)
    }

    /// Moves the table to a new name, file included.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        self.require(from)?;
        self.require_vacant(to)?;
        self.disk.rename_file(from, to)?;
        self.storage.rename(from, to);
        info!(from, to, "renamed table");
        Ok(())
    }

    /// Duplicates the table under a new name, file included.
    pub fn copy(&mut self, from: &str, to: &str) -> Result<()> {
        self.require(from)?;
        self.require_vacant(to)?;
        self.disk.copy_file(from, to)?;
        self.storage.copy(from, to);
        info!(from, to, "copied table");
        Ok(())
    }

    fn require(&self, table: &str) -> Result<()> {
        if !self.storage.contains(table) {
            return Err(Error::not_found(table));
        }
        Ok(())
    }

    fn require_vacant(&self, table: &str) -> Result<()> {
        validate_table_name(table)?;
        if self.storage.contains(table) || self.disk.exists(table) {
            return Err(Error::TableExists {
                table: table.to_string(),
            });
        }
        Ok(())
    }
}
