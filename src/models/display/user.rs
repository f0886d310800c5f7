//! User, role, and user group display models

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::{Permission, Role, User, UserGroup};

/// User display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "2FA")]
    pub totp: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        let state = if user.locked {
            "locked"
        } else if user.enabled {
            "enabled"
        } else {
            "disabled"
        };

        Self {
            name: user.full_name(),
            state: state.to_string(),
            totp: if user.totp_enabled { "yes" } else { "no" }.to_string(),
            id: user.user_id,
            email: user.email,
        }
    }
}

/// Role display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RoleDisplay {
    #[tabled(rename = "ROLE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "PERMISSIONS")]
    pub permissions: usize,

    #[tabled(rename = "USERS")]
    pub users: u64,
}

impl From<Role> for RoleDisplay {
    fn from(role: Role) -> Self {
        Self {
            users: role.stats.as_ref().map(|s| s.all_user_count).unwrap_or(0),
            permissions: role.permissions.len(),
            description: or_dash(Some(role.description.as_str())),
            id: role.role_id,
            name: role.name,
        }
    }
}

/// Permission display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PermissionDisplay {
    #[tabled(rename = "PERMISSION")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Permission> for PermissionDisplay {
    fn from(permission: Permission) -> Self {
        Self {
            category: or_dash(Some(permission.category.as_str())),
            description: or_dash(Some(permission.description.as_str())),
            name: permission.name,
        }
    }
}

/// User group display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserGroupDisplay {
    #[tabled(rename = "GROUP ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "USERS")]
    pub users: u64,

    #[tabled(rename = "ROLES")]
    pub roles: usize,
}

impl From<UserGroup> for UserGroupDisplay {
    fn from(group: UserGroup) -> Self {
        Self {
            users: group.user_count(),
            roles: group.role_mappings.len(),
            description: or_dash(Some(group.description.as_str())),
            id: group.user_group_id,
            name: group.name,
        }
    }
}
