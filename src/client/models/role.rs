//! Role, permission, and user group models

use serde::{Deserialize, Serialize};

use super::user::RoleMapping;

/// A role: a named set of permissions granted through role mappings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub role_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub permissions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RoleStats>,
}

/// How many users and groups hold a role
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleStats {
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub group_count: u64,
    /// Direct users plus members of groups holding the role
    #[serde(default)]
    pub all_user_count: u64,
}

/// Request body for `POST /roles`
#[derive(Debug, Clone, Serialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

/// Request body for `PATCH /roles/{id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl RoleUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.permissions.is_none()
    }
}

/// A permission that can be placed in a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// A group of users sharing role mappings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    pub user_group_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Member user IDs; the server may send null entries
    #[serde(default, deserialize_with = "ids_skipping_null")]
    pub user_ids: Vec<String>,

    #[serde(default)]
    pub role_mappings: Vec<RoleMapping>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserGroupStats>,
}

impl UserGroup {
    /// Member count from the server's stats, falling back to the ID list
    pub fn user_count(&self) -> u64 {
        self.stats
            .as_ref()
            .map(|s| s.user_count)
            .unwrap_or(self.user_ids.len() as u64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserGroupStats {
    #[serde(default)]
    pub user_count: u64,
}

/// Request body for `POST /user_groups`
#[derive(Debug, Clone, Serialize)]
pub struct UserGroupCreate {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_mappings: Vec<RoleMapping>,
}

/// Request body for `PATCH /user_groups/{id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_mappings: Option<Vec<RoleMapping>>,
}

impl UserGroupUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.user_ids.is_none()
            && self.role_mappings.is_none()
    }
}

fn ids_skipping_null<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let ids: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(ids.unwrap_or_default().into_iter().flatten().collect())
}
