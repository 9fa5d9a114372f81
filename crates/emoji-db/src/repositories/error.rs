//! Error handling utilities for repositories

use emoji_core::error::DomainError;
use emoji_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation to `on_unique`, anything else to a database error
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => map_db_error(e),
    }
}

/// Fail with `UserNotFound` when an update touched no active row
pub fn ensure_user_touched(rows_affected: u64, id: Snowflake) -> Result<(), DomainError> {
    if rows_affected == 0 {
        Err(DomainError::UserNotFound(id))
    } else {
        Ok(())
    }
}
