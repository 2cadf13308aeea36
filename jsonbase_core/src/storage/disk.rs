use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::options::StoreOptions;
use crate::types::Record;

mod lifecycle;

/// File-backed persistence: one JSON array file per table.
/// Every read and write opens, uses and closes its own handle.
#[derive(Debug)]
pub struct DiskStorage {
    root: PathBuf,
    options: StoreOptions,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let root = root.into();
        if options.create_dir {
            fs::create_dir_all(&root).map_err(|e| Error::io("create directory", &root, e))?;
        }
        Ok(Self { root, options })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn table_file_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.{}", self.options.extension))
    }

    fn temp_file_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.{}.tmp", self.options.extension))
    }

    /// Names of table files directly inside the root, sorted.
    pub fn discover(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io("list directory", &self.root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("list directory", &self.root, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.options.extension.as_str()) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!(path = %path.display(), "skipping table file with non UTF-8 name");
                continue;
            };
            if validate_table_name(stem).is_err() {
                warn!(path = %path.display(), "skipping table file with unusable name");
                continue;
            }
            names.push(stem.to_string());
        }
        names.sort();
        Ok(names)
    }

    /// Reads and decodes a whole table file.
    /// Returns `None` when the file does not exist.
    pub fn read_table(&self, table: &str) -> Result<Option<(Vec<Record>, u64)>> {
        let path = self.table_file_path(table);
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io("read table file", &path, e)),
        };
        let rows: Vec<Record> =
            serde_json::from_slice(&content).map_err(|source| Error::Corrupt { path, source })?;
        debug!(table, rows = rows.len(), bytes = content.len(), "loaded table");
        Ok(Some((rows, content.len() as u64)))
    }

    pub fn encode(&self, table: &str, rows: &[Record]) -> Result<Vec<u8>> {
        let encoded = if self.options.pretty {
            serde_json::to_vec_pretty(rows)
        } else {
            serde_json::to_vec(rows)
        };
        encoded.map_err(|source| Error::Encode {
            table: table.to_string(),
            source,
        })
    }

    /// Rewrites a table file in full through a temporary file and rename.
    /// The temporary file never outlives a failed write.
    /// Returns the new byte length.
    pub fn write_table(&self, table: &str, rows: &[Record]) -> Result<u64> {
        let bytes = self.encode(table, rows)?;
        let tmp = self.temp_file_path(table);
        let path = self.table_file_path(table);

        let written = self.write_temp(&tmp, &bytes).and_then(|()| {
            fs::rename(&tmp, &path).map_err(|e| Error::io("replace table file", &path, e))
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        debug!(table, rows = rows.len(), bytes = bytes.len(), "persisted table");
        Ok(bytes.len() as u64)
    }

    fn write_temp(&self, tmp: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp)
            .map_err(|e| Error::io("open temporary file", tmp, e))?;
        file.write_all(bytes)
            .map_err(|e| Error::io("write temporary file", tmp, e))?;
        if self.options.sync_writes {
            file.sync_all()
                .map_err(|e| Error::io("sync temporary file", tmp, e))?;
        }
        Ok(())
    }
}

/// Table names become file names, so they must stay inside the root.
pub fn validate_table_name(table: &str) -> Result<()> {
    let bad = table.is_empty()
        || table == "."
        || table == ".."
        || table.contains(['/', '\\', '\0']);
    if bad {
        return Err(Error::InvalidTableName {
            table: table.to_string(),
        });
    }
    Ok(())
}
