/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.invalid_record")]
    InvalidRecord,
    #[error("repository.timeout")]
    Timeout,
    #[error("repository.cancelled")]
    Cancelled,
}

/// Blob store errors for domain layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.rejected")]
    Rejected { status: u16 },
    #[error("storage.network")]
    Network,
    #[error("storage.invalid_response")]
    InvalidResponse,
    #[error("storage.io")]
    Io,
    #[error("storage.timeout")]
    Timeout,
    #[error("storage.cancelled")]
    Cancelled,
}

/// Why a guarded remote call ended without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    Timeout,
    Cancelled,
}

impl From<Interruption> for RepositoryError {
    fn from(interruption: Interruption) -> Self {
        match interruption {
            Interruption::Timeout => RepositoryError::Timeout,
            Interruption::Cancelled => RepositoryError::Cancelled,
        }
    }
}

impl From<Interruption> for StorageError {
    fn from(interruption: Interruption) -> Self {
        match interruption {
            Interruption::Timeout => StorageError::Timeout,
            Interruption::Cancelled => StorageError::Cancelled,
        }
    }
}
