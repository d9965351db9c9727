pub mod database;
pub mod environment;

pub use database::{DatabaseConfig, merge_with_delimiter};
