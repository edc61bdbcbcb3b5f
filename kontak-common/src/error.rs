//! Common error types for Kontak

use thiserror::Error;

/// Common result type for Kontak operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Kontak crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Write rejected by a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Stored data that cannot be decoded
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map a sqlx error, turning unique-constraint violations into `Conflict`
    ///
    /// `what` names the unique value so the caller can report it back.
    pub fn from_write(err: sqlx::Error, what: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::Conflict(what.to_string())
            }
            _ => Error::Database(err),
        }
    }
}
