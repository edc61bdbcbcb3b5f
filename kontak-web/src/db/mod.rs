//! Store queries for the three collections
//!
//! One module per collection. Every function takes the pool explicitly and
//! performs a single statement; handlers own the request lifecycle.

pub mod addresses;
pub mod contacts;
pub mod program_studies;

use kontak_common::{Error, Result};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

/// Read the TEXT surrogate id column
fn row_id(row: &SqliteRow) -> Result<Uuid> {
    let raw: String = row.try_get("id")?;
    Uuid::parse_str(&raw)
        .map_err(|e| Error::Internal(format!("Corrupt record id '{}': {}", raw, e)))
}
