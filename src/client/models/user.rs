//! User models

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,

    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub totp_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    #[serde(default)]
    pub role_mappings: Vec<RoleMapping>,

    #[serde(default)]
    pub user_groups: Vec<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Grants a role over all targets or a set of target groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMapping {
    /// Set by the server on mappings attached to a user group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_mapping_id: Option<String>,
    pub role_id: String,
    #[serde(default)]
    pub access_all_targets: bool,
    #[serde(default)]
    pub target_group_ids: Vec<String>,
}

/// Request body for `POST /users`
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// SHA-256 hex digest of the password, see [`hash_password`]
    pub password: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_mappings: Vec<RoleMapping>,
}

/// Request body for `PATCH /users/{id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_mappings: Option<Vec<RoleMapping>>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.enabled.is_none()
            && self.role_mappings.is_none()
    }
}

/// The server expects passwords as lowercase SHA-256 hex, never in clear text.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{:x}", digest)
}
