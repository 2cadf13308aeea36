pub mod builder;
pub mod predicate;
pub mod selection;

pub use builder::QueryBuilder;
pub use predicate::Predicate;
pub use selection::Selection;
