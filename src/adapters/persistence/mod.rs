//! Catalog storage adapters. Implement CatalogPort.

pub mod memory_catalog;
pub mod seed;
pub mod sqlite_catalog;

pub use memory_catalog::InMemoryCatalog;
pub use seed::{SeedCatalog, SeedDocument};
pub use sqlite_catalog::SqliteCatalog;
