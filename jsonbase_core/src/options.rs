use serde::{Deserialize, Serialize};

/// Options controlling how a store maps tables onto files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// File extension for table files, without the leading dot.
    pub extension: String,

    /// Create the store directory on open when it does not exist.
    pub create_dir: bool,

    /// Fsync the temporary file before renaming it over the table file.
    pub sync_writes: bool,

    /// Pretty-print persisted JSON.
    pub pretty: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            create_dir: true,
            sync_writes: true,
            pretty: false,
        }
    }
}

impl StoreOptions {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
