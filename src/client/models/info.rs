//! Server information model

use serde::{Deserialize, Serialize};

/// Response of `GET /info`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub build_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<serde_json::Value>,
}
