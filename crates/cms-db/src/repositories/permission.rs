//! MySQL implementation of PermissionRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use cms_core::entities::Permission;
use cms_core::traits::{PermissionRepository, RepoResult};

use crate::models::PermissionModel;

use super::error::map_db_error;

/// MySQL implementation of PermissionRepository
#[derive(Clone)]
pub struct MySqlPermissionRepository {
    pool: MySqlPool,
}

impl MySqlPermissionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionRepository for MySqlPermissionRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionModel>(
            r"
            SELECT id, name, value, category, description
            FROM permissions
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Permission::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: i64) -> RepoResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionModel>(
            r"
            SELECT p.id, p.name, p.value, p.category, p.description
            FROM group_permissions gp
            JOIN permissions p ON p.id = gp.permission_id
            WHERE gp.group_id = ?
            ORDER BY p.id
            ",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Permission::from).collect())
    }
}
