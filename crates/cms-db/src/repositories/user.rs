//! MySQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use cms_core::entities::User;
use cms_core::error::DomainError;
use cms_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{insert_id, map_db_error, map_foreign_key_violation, map_unique_violation};

const SELECT_USER: &str = r"
    SELECT u.id, u.name, u.email, u.group_id, g.name AS group_name, u.status
    FROM users u
    LEFT JOIN users_groups g ON g.id = u.group_id
";

/// Map a write error: duplicate email or unknown group
fn map_write_error(e: sqlx::Error, group_id: Option<i64>) -> DomainError {
    let is_unique = e
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());
    if is_unique {
        return map_unique_violation(e, || DomainError::EmailAlreadyExists);
    }
    map_foreign_key_violation(e, || DomainError::GroupNotFound(group_id.unwrap_or_default()))
}

/// MySQL implementation of UserRepository
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySqlUserRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!("{SELECT_USER} WHERE u.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!("{SELECT_USER} WHERE u.email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(&format!("{SELECT_USER} ORDER BY u.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE email = ? AND id <> ?
            ",
        )
        .bind(email)
        .bind(except_id.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count > 0)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO users (name, email, password, group_id, status)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.group_id)
        .bind(user.status.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.group_id))?;

        Ok(insert_id(result.last_insert_id()))
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(user.id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        if exists == 0 {
            return Ok(false);
        }

        sqlx::query(
            r"
            UPDATE users
            SET name = ?, email = ?, group_id = ?, status = ?
            WHERE id = ?
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.group_id)
        .bind(user.status.as_i32())
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.group_id))?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }
}
