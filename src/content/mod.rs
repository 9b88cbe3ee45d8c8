pub mod json;
pub mod regions;
pub mod repository;
pub mod sqlite;

pub use json::JsonCatalog;
pub use regions::{load_region, Region, CATALOG_MAX_ID, REGION_BATCH_SIZE};
pub use repository::{CatalogError, CatalogProvider};
pub use sqlite::SqliteCatalog;
