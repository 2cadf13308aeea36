pub mod ddl;
pub mod dml;
pub mod export;
pub mod filter;

pub use export::{export_file_name, Export};
pub use filter::matching_positions;
