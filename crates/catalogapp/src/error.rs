use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("ID must be unique: item {0} already exists")]
    DuplicateId(ItemId),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid priority: {0:?} (expected \"urgent\" or \"normal\")")]
    InvalidPriority(String),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for every failure that originates in saving or loading a snapshot.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            CatalogError::Io(_) | CatalogError::Serialization(_) | CatalogError::Persistence(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
