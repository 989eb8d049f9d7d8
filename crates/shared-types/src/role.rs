use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::{null_to_default, trimmed};
use crate::Searchable;

/// Permission names the school API understands.
pub const PERMISSION_NAMES: &[&str] = &[
    "create-assignment",
    "update-assignment",
    "view-assignment",
    "create-answer",
];

/// Message the school API returns when a role is created.
pub const ROLE_CREATED_MSG: &str = "Role created Successfully";

/// Human label for a permission id ("create-assignment" → "Create assignment").
pub fn permission_label(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permission {
    #[serde(default)]
    pub permission_id: i64,
    pub name: String,
}

/// A role and the permissions attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleWithPermissions {
    pub role_id: i64,
    pub name: String,
    #[serde(rename = "role_permissions", default, deserialize_with = "null_to_default")]
    pub permissions: Vec<Permission>,
}

impl RoleWithPermissions {
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p.name == name)
    }

    pub fn permission_names(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.name.clone()).collect()
    }
}

impl Searchable for RoleWithPermissions {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.permission_names().join(" "))
    }
}

#[cfg(feature = "validation")]
fn validate_permission_grants(
    permission: &BTreeMap<String, bool>,
) -> Result<(), validator::ValidationError> {
    if permission.values().any(|granted| *granted) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("permission")
            .with_message("Select at least one permission".into()))
    }
}

/// Body for creating or updating a role.
///
/// `permission` maps every known permission name to whether it is granted,
/// which is the shape the school API expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RoleRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Role name is required"))
    )]
    pub role: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_permission_grants"))
    )]
    pub permission: BTreeMap<String, bool>,
}

impl RoleRequest {
    pub fn new<'a>(role: &str, granted: impl IntoIterator<Item = &'a str>) -> Self {
        let mut permission: BTreeMap<String, bool> = PERMISSION_NAMES
            .iter()
            .map(|name| (name.to_string(), false))
            .collect();
        for name in granted {
            permission.insert(name.to_string(), true);
        }
        Self {
            role: trimmed(role),
            permission,
        }
    }

    /// Prefill an edit form from an existing role.
    pub fn from_role(role: &RoleWithPermissions) -> Self {
        Self::new(&role.name, role.permissions.iter().map(|p| p.name.as_str()))
    }

    pub fn granted(&self) -> Vec<&str> {
        self.permission
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Local mirror of an updated role, keeping ids of permissions it already had.
    pub fn apply_to(&self, role: &mut RoleWithPermissions) {
        let previous = std::mem::take(&mut role.permissions);
        role.name = self.role.clone();
        role.permissions = self
            .granted()
            .into_iter()
            .map(|name| {
                previous
                    .iter()
                    .find(|p| p.name == name)
                    .cloned()
                    .unwrap_or_else(|| Permission {
                        permission_id: 0,
                        name: name.to_string(),
                    })
            })
            .collect();
    }
}
