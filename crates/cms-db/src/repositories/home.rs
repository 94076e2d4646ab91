//! MySQL implementation of HomeRepository (`fragmanlar`, `bolumler`)

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, instrument};

use cms_core::entities::{Episode, Trailer};
use cms_core::traits::{HomeRepository, RepoResult};

use crate::models::{EpisodeModel, TrailerModel};

use super::error::map_db_error;

/// MySQL implementation of HomeRepository
#[derive(Clone)]
pub struct MySqlHomeRepository {
    pool: MySqlPool,
}

impl MySqlHomeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HomeRepository for MySqlHomeRepository {
    #[instrument(skip(self))]
    async fn active_trailers(&self) -> RepoResult<Vec<Trailer>> {
        let rows = sqlx::query_as::<_, TrailerModel>(
            r"
            SELECT id, title, image, time, day, is_active, created_at
            FROM fragmanlar
            WHERE is_active = TRUE
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Trailer::from).collect())
    }

    #[instrument(skip(self))]
    async fn active_episodes(&self) -> RepoResult<Vec<Episode>> {
        let rows = sqlx::query_as::<_, EpisodeModel>(
            r"
            SELECT id, title, image, is_active, created_at
            FROM bolumler
            WHERE is_active = TRUE
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Episode::from).collect())
    }

    #[instrument(skip_all, fields(trailers = trailers.len(), episodes = episodes.len()))]
    async fn save(&self, trailers: &[Trailer], episodes: &[Episode]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for trailer in trailers {
            let query = if trailer.is_persisted() {
                sqlx::query(
                    r"
                    UPDATE fragmanlar
                    SET title = ?, image = ?, time = ?, day = ?, is_active = ?
                    WHERE id = ?
                    ",
                )
                .bind(&trailer.title)
                .bind(&trailer.image)
                .bind(&trailer.time)
                .bind(&trailer.day)
                .bind(trailer.is_active)
                .bind(trailer.id)
            } else {
                sqlx::query(
                    r"
                    INSERT INTO fragmanlar (title, image, time, day, is_active)
                    VALUES (?, ?, ?, ?, ?)
                    ",
                )
                .bind(&trailer.title)
                .bind(&trailer.image)
                .bind(&trailer.time)
                .bind(&trailer.day)
                .bind(trailer.is_active)
            };
            query.execute(&mut *tx).await.map_err(map_db_error)?;
        }

        for episode in episodes {
            let query = if episode.is_persisted() {
                sqlx::query("UPDATE bolumler SET title = ?, image = ?, is_active = ? WHERE id = ?")
                    .bind(&episode.title)
                    .bind(&episode.image)
                    .bind(episode.is_active)
                    .bind(episode.id)
            } else {
                sqlx::query("INSERT INTO bolumler (title, image, is_active) VALUES (?, ?, ?)")
                    .bind(&episode.title)
                    .bind(&episode.image)
                    .bind(episode.is_active)
            };
            query.execute(&mut *tx).await.map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!("Homepage content saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_trailer(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM fragmanlar WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_episode(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM bolumler WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
