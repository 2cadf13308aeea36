pub mod mem;
pub mod disk;

// Re-export main types for convenience
pub use mem::{MemStorage, TableMeta};
pub use disk::{validate_table_name, DiskStorage};
