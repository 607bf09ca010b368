//! In-memory stores
//!
//! Provides tenant-scoped CRUD over process-memory collections. Each store
//! guards its collection with a `parking_lot::RwLock`; every mutating
//! operation takes the write lock for its full read-modify-write, so stores
//! stay sequentially consistent with no interleaved partial writes under
//! real parallelism.
//!
//! Stores signal not-found / validation conditions via return values and
//! never panic; the API boundary translates outcomes into HTTP responses.

pub mod audit_log;
pub mod menu;
pub mod order;
pub mod organization;
pub mod staff;

// Re-exports
pub use audit_log::AuditLogStore;
pub use menu::MenuStore;
pub use order::{OrderDraft, OrderError, OrderStore};
pub use organization::OrganizationStore;
pub use staff::StaffStore;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            StoreError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            StoreError::Validation(msg) => AppError::with_message(ErrorCode::ValidationFailed, msg),
        }
    }
}
