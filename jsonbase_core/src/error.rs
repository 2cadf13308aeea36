use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the store.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Table '{table}' does not exist")]
    TableNotFound { table: String },

    #[error("Table '{table}' already exists")]
    TableExists { table: String },

    #[error("Invalid table name '{table}'")]
    InvalidTableName { table: String },

    /// A batch insert element was not a JSON object.
    #[error("Element {index} is not a record (found {found})")]
    NotARecord { index: usize, found: String },

    #[error("Failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed table file '{}': {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode table '{table}': {source}")]
    Encode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(table: &str) -> Self {
        Self::TableNotFound {
            table: table.to_string(),
        }
    }

    /// Returns true for unknown tables and files that vanished underneath us.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
            || matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
