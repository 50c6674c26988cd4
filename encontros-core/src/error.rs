//! Error types for the encontros ecosystem.

use thiserror::Error;

/// Errors surfaced by the record store and configuration loading.
///
/// Operations never fail for missing records: lookups return `Ok(None)` and
/// deletes of absent ids succeed silently. Every variant here is a real
/// fault in the underlying database, serialization or environment.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not open database: {0}")]
    Open(#[from] redb::DatabaseError),

    #[error("Transaction failed: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage fault: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit failed: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for encontros operations.
pub type StoreResult<T> = Result<T, StoreError>;
