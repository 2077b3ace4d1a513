//! Error handling utilities for repositories

use dofus_core::error::DomainError;
use dofus_core::value_objects::EventId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_foreign_key: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_foreign_key();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "event not found" error
pub fn event_not_found(id: EventId) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create the error for a row pointing at a missing parent
pub fn unknown_reference() -> DomainError {
    DomainError::ValidationError(
        "Referenced server, tag, user, or character does not exist".to_string(),
    )
}
