use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("unknown sort order: {0} (expected asc or desc)")]
    UnknownSortOrder(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
