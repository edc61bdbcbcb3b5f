//! Address collection queries

use chrono::Utc;
use kontak_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::row_id;
use crate::models::{Address, AddressForm};

const COLUMNS: &str =
    "id, city, street, block, sub_block, postal_code, phone, created_at, updated_at";

fn from_row(row: &SqliteRow) -> Result<Address> {
    Ok(Address {
        id: row_id(row)?,
        city: row.try_get("city")?,
        street: row.try_get("street")?,
        block: row.try_get("block")?,
        sub_block: row.try_get("sub_block")?,
        postal_code: row.try_get("postal_code")?,
        phone: row.try_get("phone")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Address>> {
    let rows = sqlx::query(&format!("SELECT {} FROM addresses ORDER BY rowid ASC", COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Address>> {
    let row = sqlx::query(&format!("SELECT {} FROM addresses WHERE id = ?", COLUMNS))
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn insert(pool: &SqlitePool, form: &AddressForm) -> Result<Address> {
    let now = Utc::now();
    let address = Address {
        id: Uuid::new_v4(),
        city: form.city.clone(),
        street: form.street.clone(),
        block: form.block.clone(),
        sub_block: form.sub_block.clone(),
        postal_code: form.postal_code.clone(),
        phone: form.phone.clone(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO addresses (
            id, city, street, block, sub_block, postal_code, phone, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(address.id.to_string())
    .bind(&address.city)
    .bind(&address.street)
    .bind(&address.block)
    .bind(&address.sub_block)
    .bind(&address.postal_code)
    .bind(&address.phone)
    .bind(address.created_at)
    .bind(address.updated_at)
    .execute(pool)
    .await?;

    Ok(address)
}

/// Returns `false` when no address has that id.
pub async fn update(pool: &SqlitePool, id: Uuid, form: &AddressForm) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE addresses
        SET city = ?, street = ?, block = ?, sub_block = ?, postal_code = ?, phone = ?,
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&form.city)
    .bind(&form.street)
    .bind(&form.block)
    .bind(&form.sub_block)
    .bind(&form.postal_code)
    .bind(&form.phone)
    .bind(Utc::now())
    .bind(id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_by_id(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontak_common::db::init_memory_database;

    fn form(city: &str) -> AddressForm {
        AddressForm {
            id: None,
            city: city.to_string(),
            street: "Jl. Letjen S. Parman No. 1".to_string(),
            block: "003".to_string(),
            sub_block: "005".to_string(),
            postal_code: "11440".to_string(),
            phone: "081234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_same_content_twice_is_allowed() {
        let pool = init_memory_database().await.unwrap();
        let a = insert(&pool, &form("Jakarta")).await.unwrap();
        let b = insert(&pool, &form("Jakarta")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(list(&pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_id() {
        let pool = init_memory_database().await.unwrap();
        let created = insert(&pool, &form("Jakarta")).await.unwrap();

        assert!(update(&pool, created.id, &form("Bandung")).await.unwrap());
        let updated = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(updated.city, "Bandung");
        assert_eq!(updated.id, created.id);

        assert!(delete_by_id(&pool, created.id).await.unwrap());
        assert!(!delete_by_id(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }
}
