//! MySQL implementation of ProgramRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use cms_core::entities::Program;
use cms_core::traits::{ProgramRepository, RepoResult};

use crate::models::ProgramModel;

use super::error::{insert_id, map_db_error};

const SELECT_PROGRAM: &str = r"
    SELECT id, title, subtitle, description, presenter, broadcast_day,
           broadcast_time, image, category, is_active, created_at, updated_at
    FROM programs
";

/// MySQL implementation of ProgramRepository
#[derive(Clone)]
pub struct MySqlProgramRepository {
    pool: MySqlPool,
}

impl MySqlProgramRepository {
    /// Create a new MySqlProgramRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramRepository for MySqlProgramRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Program>> {
        let rows = sqlx::query_as::<_, ProgramModel>(&format!("{SELECT_PROGRAM} ORDER BY id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Program::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Program>> {
        let result = sqlx::query_as::<_, ProgramModel>(&format!("{SELECT_PROGRAM} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Program::from))
    }

    #[instrument(skip(self, program), fields(title = %program.title))]
    async fn create(&self, program: &Program) -> RepoResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO programs
                (title, subtitle, description, presenter, broadcast_day,
                 broadcast_time, image, category, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&program.title)
        .bind(&program.subtitle)
        .bind(&program.description)
        .bind(&program.presenter)
        .bind(&program.broadcast_day)
        .bind(&program.broadcast_time)
        .bind(&program.image)
        .bind(&program.category)
        .bind(program.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(insert_id(result.last_insert_id()))
    }

    #[instrument(skip(self, program), fields(id = program.id))]
    async fn update(&self, program: &Program) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM programs WHERE id = ?")
            .bind(program.id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        if exists == 0 {
            return Ok(false);
        }

        sqlx::query(
            r"
            UPDATE programs
            SET title = ?, subtitle = ?, description = ?, presenter = ?,
                broadcast_day = ?, broadcast_time = ?, image = ?, category = ?,
                is_active = ?
            WHERE id = ?
            ",
        )
        .bind(&program.title)
        .bind(&program.subtitle)
        .bind(&program.description)
        .bind(&program.presenter)
        .bind(&program.broadcast_day)
        .bind(&program.broadcast_time)
        .bind(&program.image)
        .bind(&program.category)
        .bind(program.is_active)
        .bind(program.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM programs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
