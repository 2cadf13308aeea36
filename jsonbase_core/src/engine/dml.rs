use serde_json::Value;
use tracing::debug;

use crate::Database;
use crate::error::{Error, Result};
use crate::query::Predicate;
use crate::storage::validate_table_name;
use crate::types::Record;
use crate::types::value::type_name;

impl Database {
    /// Appends one record and persists. Inserting into a table that is not
    /// loaded creates it.
    pub fn insert(&mut self, table: &str, record: Record) -> Result<()> {
        validate_table_name(table)?;
        self.storage.entry(table).push(record);
        self.num_rows.set(1);
        self.persist(table)
    }

    /// Appends every element, which must all be JSON objects. Nothing is
    /// appended unless every element is valid. Returns the number inserted.
    pub fn multi_insert<I>(&mut self, table: &str, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = Value>,
    {
        validate_table_name(table)?;
        let mut valid: Vec<Record> = Vec::new();
        for (index, value) in records.into_iter().enumerate() {
            match value {
                Value::Object(record) => valid.push(record),
                other => {
                    return Err(Error::NotARecord {
                        index,
                        found: type_name(&other).to_string(),
                    });
                }
            }
        }

        let count = valid.len();
        self.storage.entry(table).extend(valid);
        self.num_rows.set(count);
        self.persist(table)?;
        Ok(count)
    }

    /// Sets the fields in `data` on every matching record, creating fields
    /// that are missing. Returns `false` and writes nothing when no record
    /// matches.
    pub fn update(&mut self, table: &str, predicate: &Predicate, data: Record) -> Result<bool> {
        let hits = self.find(table, predicate);
        if hits.is_empty() {
            return Ok(false);
        }
        let rows = self.storage.scan_mut(table).ok_or_else(|| Error::not_found(table))?;
        for pos in &hits {
            if let Some(record) = rows.get_mut(*pos) {
                for (field, value) in &data {
                    record.insert(field.clone(), value.clone());
                }
            }
        }
        debug!(table, updated = hits.len(), fields = data.len(), "updated records");
        self.persist(table)?;
        Ok(true)
    }

    /// Removes every matching record; later records shift down.
    /// Returns `false` and writes nothing when no record matches.
    pub fn delete(&mut self, table: &str, predicate: &Predicate) -> Result<bool> {
        let hits = self.find(table, predicate);
        if hits.is_empty() {
            return Ok(false);
        }
        let rows = self.storage.scan_mut(table).ok_or_else(|| Error::not_found(table))?;
        let mut pos = 0usize;
        rows.retain(|_| {
            // hits is ascending
            let keep = hits.binary_search(&pos).is_err();
            pos += 1;
            keep
        });
        debug!(table, deleted = hits.len(), remaining = rows.len(), "deleted records");
        self.persist(table)?;
        Ok(true)
    }
}
