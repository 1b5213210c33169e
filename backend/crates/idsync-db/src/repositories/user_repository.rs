//! User repository: primary-key operations on the `users` table.
//!
//! Updates and deletes report whether a row matched instead of failing, so
//! an event for an id the store has never seen is a harmless no-op.

use crate::{DbError, Result as DbErrorResult};

use idsync_core::{FieldUpdate, StoreResult, UserPatch, UserRecord, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &UserRecord) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, image_url, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.image_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::DuplicateKey {
                    id: user.id.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => DbError::from(e),
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, image_url
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<UserRecord> {
            Ok(UserRecord {
                id: r.try_get("id")?,
                email: r.try_get("email")?,
                name: r.try_get("name")?,
                image_url: r.try_get("image_url")?,
            })
        })
        .transpose()
    }

    /// Apply only the `Set` fields of `patch`. Returns `false` if no row matched.
    pub async fn update_by_id(&self, id: &str, patch: &UserPatch) -> DbErrorResult<bool> {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE users SET updated_at = ");
        builder.push_bind(Utc::now().timestamp());

        if let FieldUpdate::Set(email) = &patch.email {
            builder.push(", email = ").push_bind(email.clone());
        }
        if let FieldUpdate::Set(name) = &patch.name {
            builder.push(", name = ").push_bind(name.clone());
        }
        if let FieldUpdate::Set(image_url) = &patch.image_url {
            builder.push(", image_url = ").push_bind(image_url.clone());
        }

        builder.push(" WHERE id = ").push_bind(id.to_string());

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` if no row matched.
    pub async fn delete_by_id(&self, id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, record: &UserRecord) -> StoreResult<()> {
        Ok(UserRepository::create(self, record).await?)
    }

    async fn update_by_id(&self, id: &str, patch: &UserPatch) -> StoreResult<bool> {
        Ok(UserRepository::update_by_id(self, id, patch).await?)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(UserRepository::delete_by_id(self, id).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        Ok(UserRepository::find_by_id(self, id).await?)
    }
}
