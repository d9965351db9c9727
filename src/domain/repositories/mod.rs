pub mod repository;

pub use repository::{EntityId, Predicate, Repository};
