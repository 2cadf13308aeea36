use std::collections::HashMap;

use crate::types::Record;

/// Cached facts about a table's last persisted form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableMeta {
    /// Serialized byte length of the table file.
    pub size: u64,
}

/// In-memory record store: table name to ordered records.
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: HashMap<String, Vec<Record>>,
    meta: HashMap<String, TableMeta>,
}

impl MemStorage {
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Replaces a table's records and its cached size.
    pub fn set(&mut self, table: &str, rows: Vec<Record>, size: u64) {
        self.tables.insert(table.to_string(), rows);
        self.meta.insert(table.to_string(), TableMeta { size });
    }

    pub fn get(&self, table: &str) -> Option<&[Record]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    /// Records of a table, empty for tables that were never loaded.
    pub fn scan(&self, table: &str) -> &[Record] {
        self.get(table).unwrap_or(&[])
    }

    pub fn scan_mut(&mut self, table: &str) -> Option<&mut Vec<Record>> {
        self.tables.get_mut(table)
    }

    /// Mutable records of a table, registering it empty when unknown.
    pub fn entry(&mut self, table: &str) -> &mut Vec<Record> {
        self.meta.entry(table.to_string()).or_default();
        self.tables.entry(table.to_string()).or_default()
    }

    pub fn meta(&self, table: &str) -> Option<TableMeta> {
        self.meta.get(table).copied()
    }

    pub fn set_size(&mut self, table: &str, size: u64) {
        self.meta.insert(table.to_string(), TableMeta { size });
    }

    pub fn remove(&mut self, table: &str) -> Option<Vec<Record>> {
        self.meta.remove(table);
        self.tables.remove(table)
    }

    /// Duplicates records and meta of `from` under `to`.
    pub fn copy(&mut self, from: &str, to: &str) -> bool {
        let Some(rows) = self.tables.get(from).cloned() else {
            return false;
        };
        let meta = self.meta(from).unwrap_or_default();
        self.tables.insert(to.to_string(), rows);
        self.meta.insert(to.to_string(), meta);
        true
    }

    /// Moves records and meta of `from` to `to`.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        let Some(rows) = self.tables.remove(from) else {
            return false;
        };
        let meta = self.meta.remove(from).unwrap_or_default();
        self.tables.insert(to.to_string(), rows);
        self.meta.insert(to.to_string(), meta);
        true
    }

    /// Sorted table names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }
}
