use std::fmt;

use serde_json::Value;

use crate::types::Record;

/// Columns projected by `row()` and `rows()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Columns(Vec<String>),
}

impl Selection {
    /// Parses a comma separated column list; `*` anywhere means all columns.
    pub fn parse(columns: &str) -> Self {
        let mut selection = Selection::All;
        selection.add(columns);
        selection
    }

    /// Accumulates more columns. Duplicates are ignored and `*` resets to all.
    /// An empty list leaves the selection as it is.
    pub fn add(&mut self, columns: &str) {
        let parts: Vec<&str> = columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if parts.contains(&"*") {
            *self = Selection::All;
            return;
        }
        if parts.is_empty() {
            return;
        }
        if matches!(self, Selection::All) {
            *self = Selection::Columns(Vec::new());
        }
        if let Selection::Columns(cols) = self {
            for part in parts {
                if !cols.iter().any(|c| c == part) {
                    cols.push(part.to_string());
                }
            }
        }
    }

    pub fn columns(&self) -> Option<&[String]> {
        match self {
            Selection::All => None,
            Selection::Columns(cols) => Some(cols),
        }
    }

    /// Projects a record; selected columns the record lacks come back as null.
    pub fn project(&self, record: &Record) -> Record {
        match self {
            Selection::All => record.clone(),
            Selection::Columns(cols) => cols
                .iter()
                .map(|c| (c.clone(), record.get(c).cloned().unwrap_or(Value::Null)))
                .collect(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("*"),
            Selection::Columns(cols) => f.write_str(&cols.join(",")),
        }
    }
}
