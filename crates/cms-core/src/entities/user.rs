//! User and user group entities

/// Panel account status as stored in `users.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Map the stored integer; anything other than 1 is inactive
    pub fn from_i32(value: i32) -> Self {
        if value == 1 {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::Active => 1,
            Self::Inactive => 0,
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Panel user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group_id: Option<i64>,
    /// Name of the group, when loaded with a join
    pub group_name: Option<String>,
    pub status: UserStatus,
}

impl User {
    /// Create a new user; id is assigned on insert
    pub fn new(name: String, email: String, group_id: Option<i64>, status: UserStatus) -> Self {
        Self {
            id: 0,
            name,
            email,
            group_id,
            group_name: None,
            status,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Check whether the user belongs to `group_id`
    pub fn is_member_of(&self, group_id: i64) -> bool {
        self.group_id == Some(group_id)
    }
}

/// User group with its member count and granted permissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub members_count: i64,
    pub permissions: Vec<super::Permission>,
}

impl UserGroup {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: 0,
            name,
            description,
            members_count: 0,
            permissions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(UserStatus::from_i32(1), UserStatus::Active);
        assert_eq!(UserStatus::from_i32(0), UserStatus::Inactive);
        assert_eq!(UserStatus::from_i32(2), UserStatus::Inactive);
        assert_eq!(UserStatus::Active.as_i32(), 1);
        assert_eq!(UserStatus::Inactive.as_i32(), 0);
    }

    #[test]
    fn test_group_membership() {
        let user = User::new(
            "Editör".to_string(),
            "editor@example.com".to_string(),
            Some(3),
            UserStatus::Active,
        );
        assert!(user.is_active());
        assert!(user.is_member_of(3));
        assert!(!user.is_member_of(4));

        let orphan = User::new("x".to_string(), "x@example.com".to_string(), None, UserStatus::Inactive);
        assert!(!orphan.is_member_of(3));
        assert!(!orphan.is_active());
    }
}
