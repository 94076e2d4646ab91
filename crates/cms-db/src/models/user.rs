//! User, group and permission database models

use sqlx::FromRow;

/// Row of `users` joined with its group name
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
    pub status: i32,
}

/// Row of `users_groups` with its member count
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub members_count: i64,
}

/// Row of the `permissions` catalog
#[derive(Debug, Clone, FromRow)]
pub struct PermissionModel {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub category: String,
    pub description: String,
}

/// Permission granted to a group (`group_permissions` joined with `permissions`)
#[derive(Debug, Clone, FromRow)]
pub struct GroupPermissionModel {
    pub group_id: i64,
    #[sqlx(flatten)]
    pub permission: PermissionModel,
}
