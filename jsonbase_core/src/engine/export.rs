use chrono::{Local, NaiveDateTime};

use crate::Database;
use crate::error::Result;
use crate::storage::validate_table_name;

/// A table file ready to hand to a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Database {
    /// Reads the table file byte for byte under a timestamped name.
    pub fn export(&self, table: &str) -> Result<Export> {
        validate_table_name(table)?;
        let bytes = self.disk.read_bytes(table)?;
        let file_name = export_file_name(
            table,
            &self.disk.options().extension,
            Local::now().naive_local(),
        );
        Ok(Export { file_name, bytes })
    }
}

/// `<table>_<YYYY-mm-dd_HH-MM-SS>.<ext>`
pub fn export_file_name(table: &str, extension: &str, at: NaiveDateTime) -> String {
    format!("{table}_{}.{extension}", at.format("%Y-%m-%d_%H-%M-%S"))
}
