//! Failure signal of the underlying store, tagged by the category the access
//! functions care about when they pick a [`crate::ReturnValue`].

use rusqlite::ffi;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("uniqueness violation: {0}")]
    Unique(String),

    #[error("check constraint violation: {0}")]
    Check(String),

    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    #[error("not null violation: {0}")]
    NotNull(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Other(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let message = err.to_string();
        let rusqlite::Error::SqliteFailure(failure, _) = &err else {
            return StoreError::Other(message);
        };

        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                return StoreError::Unique(message)
            }
            ffi::SQLITE_CONSTRAINT_CHECK => return StoreError::Check(message),
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return StoreError::ForeignKey(message),
            ffi::SQLITE_CONSTRAINT_NOTNULL => return StoreError::NotNull(message),
            _ => {}
        }

        match failure.code {
            ffi::ErrorCode::CannotOpen
            | ffi::ErrorCode::NotADatabase
            | ffi::ErrorCode::DatabaseBusy
            | ffi::ErrorCode::DatabaseLocked
            | ffi::ErrorCode::SystemIoFailure
            | ffi::ErrorCode::PermissionDenied
            | ffi::ErrorCode::ReadOnly => StoreError::Connection(message),
            _ => StoreError::Other(message),
        }
    }
}
