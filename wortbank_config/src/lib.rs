mod schema;

pub use schema::{Config, DatabaseConfig, ImportConfig, SearchConfig};
