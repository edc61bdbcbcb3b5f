//! Study program collection queries

use async_trait::async_trait;
use chrono::Utc;
use kontak_common::{Error, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::row_id;
use crate::models::{ProgramStudy, ProgramStudyForm};
use crate::validation::NameLookup;

const COLUMNS: &str = "id, name, faculty, accreditation, created_at, updated_at";

fn from_row(row: &SqliteRow) -> Result<ProgramStudy> {
    Ok(ProgramStudy {
        id: row_id(row)?,
        name: row.try_get("name")?,
        faculty: row.try_get("faculty")?,
        accreditation: row.try_get("accreditation")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<ProgramStudy>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM program_studies ORDER BY rowid ASC",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<ProgramStudy>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM program_studies WHERE name = ?",
        COLUMNS
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<ProgramStudy>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM program_studies WHERE id = ?",
        COLUMNS
    ))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Returns `Error::Conflict` if the program name is already taken.
pub async fn insert(pool: &SqlitePool, form: &ProgramStudyForm) -> Result<ProgramStudy> {
    let now = Utc::now();
    let program = ProgramStudy {
        id: Uuid::new_v4(),
        name: form.name.clone(),
        faculty: form.faculty.clone(),
        accreditation: form.accreditation.clone(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO program_studies (id, name, faculty, accreditation, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(program.id.to_string())
    .bind(&program.name)
    .bind(&program.faculty)
    .bind(&program.accreditation)
    .bind(program.created_at)
    .bind(program.updated_at)
    .execute(pool)
    .await
    .map_err(|e| Error::from_write(e, &program.name))?;

    Ok(program)
}

/// Returns `false` when no program has that id.
pub async fn update(pool: &SqlitePool, id: Uuid, form: &ProgramStudyForm) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE program_studies
        SET name = ?, faculty = ?, accreditation = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&form.name)
    .bind(&form.faculty)
    .bind(&form.accreditation)
    .bind(Utc::now())
    .bind(id.to_string())
    .execute(pool)
    .await
    .map_err(|e| Error::from_write(e, &form.name))?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM program_studies WHERE name = ?")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Name lookup for the study program uniqueness rule
#[derive(Clone)]
pub struct ProgramNames(pub SqlitePool);

#[async_trait]
impl NameLookup for ProgramNames {
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>> {
        Ok(find_by_name(&self.0, name).await?.map(|p| p.id))
    }
}
