use std::fs;
use std::io;

use super::DiskStorage;
use crate::error::{Error, Result};

impl DiskStorage {
    pub fn exists(&self, table: &str) -> bool {
        self.table_file_path(table).is_file()
    }

    /// Writes a fresh empty array file for `table`.
    pub fn create_file(&self, table: &str) -> Result<u64> {
        self.write_table(table, &[])
    }

    pub fn remove_file(&self, table: &str) -> Result<()> {
        let path = self.table_file_path(table);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Already gone is what we wanted.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io("remove table file", &path, e)),
        }
    }

    pub fn rename_file(&self, from: &str, to: &str) -> Result<()> {
        let src = self.table_file_path(from);
        let dst = self.table_file_path(to);
        fs::rename(&src, &dst).map_err(|e| Error::io("rename table file", &src, e))
    }

    pub fn copy_file(&self, from: &str, to: &str) -> Result<u64> {
        let src = self.table_file_path(from);
        let dst = self.table_file_path(to);
        fs::copy(&src, &dst).map_err(|e| Error::io("copy table file", &src, e))
    }

    /// Raw file contents, byte for byte.
    pub fn read_bytes(&self, table: &str) -> Result<Vec<u8>> {
        let path = self.table_file_path(table);
        fs::read(&path).map_err(|e| Error::io("read table file", &path, e))
    }
}
