use thiserror::Error;

use crate::components::creature::{Creature, CreatureId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("catalog record {id} is invalid: {message}")]
    Validation { id: CreatureId, message: String },
}

/// Read-only source of catalog creatures.
///
/// `Ok(None)` means the id is simply absent; errors are reserved for a broken source.
pub trait CatalogProvider {
    fn creature(&self, id: CreatureId) -> Result<Option<Creature>, CatalogError>;
}
