pub mod value;

use serde_json::{Map, Value};

/// A record is one JSON object within a table
pub type Record = Map<String, Value>;
