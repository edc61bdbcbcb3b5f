//! Contact collection queries

use async_trait::async_trait;
use chrono::Utc;
use kontak_common::{Error, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::row_id;
use crate::models::{Contact, ContactForm};
use crate::validation::NameLookup;

const COLUMNS: &str = "id, name, email, phone, created_at, updated_at";

fn from_row(row: &SqliteRow) -> Result<Contact> {
    Ok(Contact {
        id: row_id(row)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All contacts in insertion order
pub async fn list(pool: &SqlitePool) -> Result<Vec<Contact>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM contacts ORDER BY rowid ASC",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Contact>> {
    let row = sqlx::query(&format!("SELECT {} FROM contacts WHERE name = ?", COLUMNS))
        .bind(name)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Contact>> {
    let row = sqlx::query(&format!("SELECT {} FROM contacts WHERE id = ?", COLUMNS))
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Insert a new contact
///
/// Returns `Error::Conflict` if the name is already taken.
pub async fn insert(pool: &SqlitePool, form: &ContactForm) -> Result<Contact> {
    let now = Utc::now();
    let contact = Contact {
        id: Uuid::new_v4(),
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO contacts (id, name, email, phone, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(contact.id.to_string())
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(contact.created_at)
    .bind(contact.updated_at)
    .execute(pool)
    .await
    .map_err(|e| Error::from_write(e, &contact.name))?;

    Ok(contact)
}

/// Overwrite the mutable fields of contact `id`
///
/// Returns `false` when no contact has that id.
pub async fn update(pool: &SqlitePool, id: Uuid, form: &ContactForm) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE contacts SET name = ?, email = ?, phone = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&form.name)
    .bind(&form.email)
    .bind(&form.phone)
    .bind(Utc::now())
    .bind(id.to_string())
    .execute(pool)
    .await
    .map_err(|e| Error::from_write(e, &form.name))?;

    Ok(result.rows_affected() > 0)
}

/// Returns `false` when no contact has that name
pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM contacts WHERE name = ?")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Name lookup for the contact uniqueness rule
#[derive(Clone)]
pub struct ContactNames(pub SqlitePool);

#[async_trait]
impl NameLookup for ContactNames {
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>> {
        Ok(find_by_name(&self.0, name).await?.map(|c| c.id))
    }
}
