//! User, group and permission model -> entity mappers

use cms_core::entities::{Permission, User, UserGroup, UserStatus};

use crate::models::{GroupModel, PermissionModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            group_id: model.group_id,
            group_name: model.group_name,
            status: UserStatus::from_i32(model.status),
        }
    }
}

impl From<PermissionModel> for Permission {
    fn from(model: PermissionModel) -> Self {
        Permission {
            id: model.id,
            name: model.name,
            value: model.value,
            category: model.category,
            description: model.description,
        }
    }
}

/// Groups come without permissions; the repository attaches them
impl From<GroupModel> for UserGroup {
    fn from(model: GroupModel) -> Self {
        UserGroup {
            id: model.id,
            name: model.name,
            description: model.description,
            members_count: model.members_count,
            permissions: Vec::new(),
        }
    }
}
