//! MySQL implementation of MediaPartnerRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use cms_core::entities::MediaPartner;
use cms_core::traits::{MediaPartnerRepository, RepoResult};

use crate::models::MediaPartnerModel;

use super::error::{insert_id, map_db_error};

/// MySQL implementation of MediaPartnerRepository
#[derive(Clone)]
pub struct MySqlMediaPartnerRepository {
    pool: MySqlPool,
}

impl MySqlMediaPartnerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaPartnerRepository for MySqlMediaPartnerRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<MediaPartner>> {
        let rows = sqlx::query_as::<_, MediaPartnerModel>(
            "SELECT id, name, url, image FROM partners ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MediaPartner::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, partner: &MediaPartner) -> RepoResult<i64> {
        let result = sqlx::query("INSERT INTO partners (name, url, image) VALUES (?, ?, ?)")
            .bind(&partner.name)
            .bind(&partner.url)
            .bind(&partner.image)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(insert_id(result.last_insert_id()))
    }

    #[instrument(skip_all, fields(count = partners.len()))]
    async fn update_all(&self, partners: &[MediaPartner]) -> RepoResult<usize> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for partner in partners {
            sqlx::query("UPDATE partners SET name = ?, url = ?, image = ? WHERE id = ?")
                .bind(&partner.name)
                .bind(&partner.url)
                .bind(&partner.image)
                .bind(partner.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(partners.len())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM partners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
