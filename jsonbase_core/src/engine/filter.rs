use tracing::debug;

use crate::Database;
use crate::query::Predicate;
use crate::types::Record;

/// Positions of records satisfying every condition, in table order.
/// An empty predicate selects every position.
pub fn matching_positions(rows: &[Record], predicate: &Predicate) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, record)| predicate.matches(record))
        .map(|(pos, _)| pos)
        .collect()
}

impl Database {
    /// Resolves a predicate against a table. Unknown tables match nothing.
    /// Records the match count for `num_rows()`.
    pub fn find(&self, table: &str, predicate: &Predicate) -> Vec<usize> {
        let rows = self.storage.scan(table);
        let hits = matching_positions(rows, predicate);
        debug!(
            table,
            conditions = predicate.len(),
            scanned = rows.len(),
            matched = hits.len(),
            "resolved predicate"
        );
        self.num_rows.set(hits.len());
        hits
    }
}
