//! MySQL implementation of DashboardRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use cms_core::entities::DashboardCounts;
use cms_core::traits::{DashboardRepository, RepoResult};

use crate::models::DashboardModel;

use super::error::map_db_error;

/// MySQL implementation of DashboardRepository
#[derive(Clone)]
pub struct MySqlDashboardRepository {
    pool: MySqlPool,
}

impl MySqlDashboardRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for MySqlDashboardRepository {
    #[instrument(skip(self))]
    async fn counts(&self) -> RepoResult<DashboardCounts> {
        let row = sqlx::query_as::<_, DashboardModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM programs) AS all_programs,
                (SELECT COUNT(*) FROM programs WHERE is_active = TRUE) AS active_programs,
                (SELECT COUNT(*) FROM fragmanlar WHERE is_active = TRUE) AS trailers,
                (SELECT COUNT(*) FROM bolumler WHERE is_active = TRUE) AS episodes,
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM partners) AS partners,
                CAST(COALESCE((SELECT is_live FROM canli_yayin WHERE id = 1), 0) AS SIGNED) AS is_live
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DashboardCounts::from(row))
    }
}
