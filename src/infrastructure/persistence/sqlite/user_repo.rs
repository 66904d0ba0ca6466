//! SQLite User Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::user::DOB_FORMAT;

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    dob: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            name: row.name,
            date_of_birth: NaiveDate::parse_from_str(&row.dob, DOB_FORMAT)
                .map_err(|e| RepositoryError::SerializationError(format!("{}: {}", row.dob, e)))?,
        })
    }
}

fn format_dob(date: NaiveDate) -> String {
    date.format(DOB_FORMAT).to_string()
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(
        &self,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UserRecord, RepositoryError> {
        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (name, dob) VALUES (?, ?) RETURNING id, name, dob",
        )
        .bind(name)
        .bind(format_dob(date_of_birth))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        UserRecord::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<UserRecord, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT id, name, dob FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.ok_or(RepositoryError::NotFound(id))
            .and_then(UserRecord::try_from)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<UserRecord>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, dob FROM users ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UserRecord, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            "UPDATE users SET name = ?, dob = ? WHERE id = ? RETURNING id, name, dob",
        )
        .bind(name)
        .bind(format_dob(date_of_birth))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.ok_or(RepositoryError::NotFound(id))
            .and_then(UserRecord::try_from)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
