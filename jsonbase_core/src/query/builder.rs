use serde_json::Value;
use tracing::debug;

use crate::Database;
use crate::query::{Predicate, Selection};
use crate::types::Record;

/// Fluent query over one store.
///
/// The builder borrows the database, so cached result positions can never
/// outlive a mutation of the table they point into.
///
/// `select` calls accumulate until `get()` runs. `get()` clears the pending
/// `where` conditions and restarts accumulation, but keeps the committed
/// column list and `from` table for `row()` and `rows()`.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'db> {
    db: &'db Database,
    select: Selection,
    pending_select: Selection,
    from: String,
    predicate: Predicate,
    results: Vec<usize>,
    num_rows: usize,
}

impl<'db> QueryBuilder<'db> {
    pub(crate) fn new(db: &'db Database) -> Self {
        Self {
            db,
            select: Selection::All,
            pending_select: Selection::All,
            from: String::new(),
            predicate: Predicate::new(),
            results: Vec::new(),
            num_rows: 0,
        }
    }

    /// Adds columns (comma separated) to the projection. `*` selects all.
    pub fn select(mut self, columns: &str) -> Self {
        let mut next = self.pending_select.clone();
        next.add(columns);
        self.select = next.clone();
        self.pending_select = next;
        self
    }

    pub fn from(mut self, table: &str) -> Self {
        self.from = table.to_string();
        self
    }

    /// Adds an equality condition. Repeating a field overwrites it.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicate.insert(field, value);
        self
    }

    /// Runs the query and caches the matching positions.
    pub fn get(mut self) -> Self {
        self.results = self.db.find(&self.from, &self.predicate);
        self.num_rows = self.results.len();
        debug!(table = %self.from, select = %self.select, matched = self.num_rows, "query executed");
        self.predicate.clear();
        self.pending_select = Selection::All;
        self
    }

    /// First result, projected. `None` when nothing matched.
    pub fn row(&self) -> Option<Record> {
        let pos = *self.results.first()?;
        let record = self.db.storage.get(&self.from)?.get(pos)?;
        Some(self.select.project(record))
    }

    /// Every result in match order, projected. `None` when nothing matched.
    pub fn rows(&self) -> Option<Vec<Record>> {
        if self.results.is_empty() {
            return None;
        }
        let records = self.db.storage.scan(&self.from);
        Some(
            self.results
                .iter()
                .filter_map(|pos| records.get(*pos))
                .map(|record| self.select.project(record))
                .collect(),
        )
    }

    /// Match count of the last `get()`.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Positions cached by the last `get()`.
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn selection(&self) -> &Selection {
        &self.select
    }

    pub fn table(&self) -> &str {
        &self.from
    }
}
