//! MySQL implementation of GroupRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, instrument};

use cms_core::entities::{Permission, UserGroup};
use cms_core::error::DomainError;
use cms_core::traits::{GroupRepository, RepoResult};

use crate::models::{GroupModel, GroupPermissionModel, PermissionModel};

use super::error::{insert_id, map_db_error, map_foreign_key_violation};

const SELECT_GROUP: &str = r"
    SELECT g.id, g.name, g.description, COUNT(u.id) AS members_count
    FROM users_groups g
    LEFT JOIN users u ON u.group_id = g.id
";

/// MySQL implementation of GroupRepository
#[derive(Clone)]
pub struct MySqlGroupRepository {
    pool: MySqlPool,
}

impl MySqlGroupRepository {
    /// Create a new MySqlGroupRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn permissions_of(&self, group_id: i64) -> RepoResult<Vec<Permission>> {
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

#[async_trait]
impl GroupRepository for MySqlGroupRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<UserGroup>> {
        let groups = sqlx::query_as::<_, GroupModel>(&format!(
            "{SELECT_GROUP} GROUP BY g.id, g.name, g.description ORDER BY g.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let grants = sqlx::query_as::<_, GroupPermissionModel>(
            r"
            SELECT gp.group_id, p.id, p.name, p.value, p.category, p.description
            FROM group_permissions gp
            JOIN permissions p ON p.id = gp.permission_id
            ORDER BY gp.group_id, p.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_group: HashMap<i64, Vec<Permission>> = HashMap::new();
        for grant in grants {
            by_group
                .entry(grant.group_id)
                .or_default()
                .push(Permission::from(grant.permission));
        }

        Ok(groups
            .into_iter()
            .map(|model| {
                let mut group = UserGroup::from(model);
                group.permissions = by_group.remove(&group.id).unwrap_or_default();
                group
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<UserGroup>> {
        let model = sqlx::query_as::<_, GroupModel>(&format!(
            "{SELECT_GROUP} WHERE g.id = ? GROUP BY g.id, g.name, g.description"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut group = UserGroup::from(model);
        group.permissions = self.permissions_of(id).await?;
        Ok(Some(group))
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &UserGroup) -> RepoResult<i64> {
        let result = sqlx::query("INSERT INTO users_groups (name, description) VALUES (?, ?)")
            .bind(&group.name)
            .bind(&group.description)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(insert_id(result.last_insert_id()))
    }

    #[instrument(skip(self))]
    async fn update(&self, group: &UserGroup) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users_groups WHERE id = ?")
            .bind(group.id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        if exists == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE users_groups SET name = ?, description = ? WHERE id = ?")
            .bind(&group.name)
            .bind(&group.description)
            .bind(group.id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn replace_permissions(
        &self,
        group_id: i64,
        permission_ids: &[i64],
    ) -> RepoResult<Vec<Permission>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM users_groups WHERE id = ? FOR UPDATE")
            .bind(group_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if locked.is_none() {
            return Err(DomainError::GroupNotFound(group_id));
        }

        sqlx::query("DELETE FROM group_permissions WHERE group_id = ?")
            .bind(group_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let mut ids = permission_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        if !ids.is_empty() {
            let mut insert: QueryBuilder<MySql> =
                QueryBuilder::new("INSERT INTO group_permissions (group_id, permission_id) ");
            insert.push_values(&ids, |mut row, permission_id| {
                row.push_bind(group_id).push_bind(*permission_id);
            });
            insert
                .build()
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    map_foreign_key_violation(e, || {
                        DomainError::ValidationError("unknown permission id".to_string())
                    })
                })?;
        }

        let stored = sqlx::query_as::<_, PermissionModel>(
            r"
            SELECT p.id, p.name, p.value, p.category, p.description
            FROM group_permissions gp
            JOIN permissions p ON p.id = gp.permission_id
            WHERE gp.group_id = ?
            ORDER BY p.id
            ",
        )
        .bind(group_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(group_id, count = stored.len(), "Group permissions replaced");
        Ok(stored.into_iter().map(Permission::from).collect())
    }
}
