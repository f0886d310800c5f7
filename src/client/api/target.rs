//! Target API trait for targets and target groups

use async_trait::async_trait;

use crate::client::models::{Target, TargetCreate, TargetGroup, TargetGroupRequest, TargetUpdate};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Target and target group operations for the Acunetix API
#[async_trait]
pub trait TargetApi: Send + Sync {
    // ========================================================================
    // Targets
    // ========================================================================

    /// Fetch one page of targets
    async fn list_targets(&self, params: &PaginationParams) -> Result<Page<Target>>;

    /// Get a single target
    async fn get_target(&self, target_id: &str) -> Result<Target>;

    /// Register a new target
    async fn create_target(&self, request: TargetCreate) -> Result<Target>;

    /// Change a target's description or criticality
    async fn update_target(&self, target_id: &str, request: TargetUpdate) -> Result<()>;

    /// Delete a target and its scan history
    async fn delete_target(&self, target_id: &str) -> Result<()>;

    // ========================================================================
    // Target groups
    // ========================================================================

    /// Fetch one page of target groups
    async fn list_target_groups(&self, params: &PaginationParams) -> Result<Page<TargetGroup>>;

    /// Get a single target group
    async fn get_target_group(&self, group_id: &str) -> Result<TargetGroup>;

    /// Create a target group
    async fn create_target_group(&self, request: TargetGroupRequest) -> Result<TargetGroup>;

    /// Rename or re-describe a target group
    async fn update_target_group(&self, group_id: &str, request: TargetGroupRequest)
    -> Result<()>;

    /// Delete a target group (its targets are kept)
    async fn delete_target_group(&self, group_id: &str) -> Result<()>;
}
