//! Panel permissions
//!
//! Permissions are rows of a static catalog keyed by a machine `value`
//! (e.g. `view_user`). A user holds the permissions of their group; checks are
//! plain set membership on the value.

use std::collections::BTreeSet;

use crate::error::DomainError;

/// Machine keys of the seeded permission catalog
pub mod permission_values {
    pub const VIEW_DASHBOARD: &str = "view_dashboard";

    pub const EDIT_HOME: &str = "edit_home";
    pub const EDIT_PROGRAMS: &str = "edit_programs";
    pub const EDIT_SCHEDULE: &str = "edit_schedule";
    pub const EDIT_LIVESTREAM: &str = "edit_livestream";
    pub const EDIT_PRESS: &str = "edit_press";
    pub const EDIT_MASTHEAD: &str = "edit_masthead";
    pub const EDIT_CONTACT: &str = "edit_contact";

    pub const EDIT_SITE_SETTINGS: &str = "edit_site_settings";
    pub const EDIT_SOCIAL_MEDIA: &str = "edit_social_media";

    pub const UPLOAD_FILES: &str = "upload_files";

    pub const VIEW_USER: &str = "view_user";
    pub const CREATE_USER: &str = "create_user";
    pub const EDIT_USER: &str = "edit_user";
    pub const DELETE_USER: &str = "delete_user";

    pub const VIEW_GROUP: &str = "view_group";
    pub const CREATE_GROUP: &str = "create_group";
    pub const EDIT_GROUP: &str = "edit_group";
    pub const MANAGE_GROUP_PERMISSIONS: &str = "manage_group_permissions";

    /// Every value in the catalog
    pub const ALL: &[&str] = &[
        VIEW_DASHBOARD,
        EDIT_HOME,
        EDIT_PROGRAMS,
        EDIT_SCHEDULE,
        EDIT_LIVESTREAM,
        EDIT_PRESS,
        EDIT_MASTHEAD,
        EDIT_CONTACT,
        EDIT_SITE_SETTINGS,
        EDIT_SOCIAL_MEDIA,
        UPLOAD_FILES,
        VIEW_USER,
        CREATE_USER,
        EDIT_USER,
        DELETE_USER,
        VIEW_GROUP,
        CREATE_GROUP,
        EDIT_GROUP,
        MANAGE_GROUP_PERMISSIONS,
    ];
}

/// The set of permission values granted to a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    /// An empty set (user without a group)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the set grants `value`
    #[inline]
    pub fn has(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// Check whether the set grants any of `values`
    pub fn has_any(&self, values: &[&str]) -> bool {
        values.iter().any(|v| self.has(v))
    }

    /// Fail with `MissingPermission` unless the set grants `value`
    pub fn require(&self, value: &str) -> Result<(), DomainError> {
        if self.has(value) {
            Ok(())
        } else {
            Err(DomainError::MissingPermission(value.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::permission_values as pv;
    use super::*;

    #[test]
    fn test_membership() {
        let set: PermissionSet = [pv::VIEW_USER, pv::CREATE_USER].into_iter().collect();
        assert!(set.has(pv::VIEW_USER));
        assert!(set.has(pv::CREATE_USER));
        assert!(!set.has(pv::DELETE_USER));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_require() {
        let set: PermissionSet = [pv::EDIT_SCHEDULE].into_iter().collect();
        assert!(set.require(pv::EDIT_SCHEDULE).is_ok());

        let err = set.require(pv::EDIT_PROGRAMS).unwrap_err();
        assert_eq!(err.code(), "MISSING_PERMISSIONS");
        assert!(err.is_authorization());
    }

    #[test]
    fn test_empty_set_grants_nothing() {
        let set = PermissionSet::empty();
        assert!(set.is_empty());
        assert!(!set.has_any(pv::ALL));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: PermissionSet = vec!["upload_files".to_string(), "upload_files".to_string()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["upload_files"]);
    }

    #[test]
    fn test_catalog_values_are_unique() {
        let set: PermissionSet = pv::ALL.iter().copied().collect();
        assert_eq!(set.len(), pv::ALL.len());
    }
}
