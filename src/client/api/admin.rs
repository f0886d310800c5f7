//! Admin API trait for server info, accounts and access control, excluded
//! hours, and issue trackers

use async_trait::async_trait;

use crate::client::models::{
    ConnectionStatus, ExcludedHoursProfile, ExcludedHoursRequest, IssueTracker,
    IssueTrackerConfig, IssueTrackerRequest, Permission, Role, RoleCreate, RoleMapping,
    RoleUpdate, ServerInfo, User, UserCreate, UserGroup, UserGroupCreate, UserGroupUpdate,
    UserUpdate,
};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Administrative operations for the Acunetix API
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Server product and version information
    async fn server_info(&self) -> Result<ServerInfo>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Fetch one page of users
    async fn list_users(&self, params: &PaginationParams) -> Result<Page<User>>;

    /// Get a single user
    async fn get_user(&self, user_id: &str) -> Result<User>;

    /// Create a user, optionally emailing them an invitation
    async fn create_user(&self, request: UserCreate, send_email: bool) -> Result<User>;

    /// Update a user's profile, state, or role mappings
    async fn update_user(&self, user_id: &str, request: UserUpdate) -> Result<()>;

    /// Delete a user
    async fn delete_user(&self, user_id: &str) -> Result<()>;

    // ========================================================================
    // Roles
    // ========================================================================

    /// Fetch one page of roles
    async fn list_roles(&self, params: &PaginationParams) -> Result<Page<Role>>;

    /// Get a single role
    async fn get_role(&self, role_id: &str) -> Result<Role>;

    /// Create a role
    async fn create_role(&self, request: RoleCreate) -> Result<Role>;

    /// Update a role's name, description, or permissions
    async fn update_role(&self, role_id: &str, request: RoleUpdate) -> Result<()>;

    /// Delete a role
    async fn delete_role(&self, role_id: &str) -> Result<()>;

    /// Every permission a role can hold
    async fn list_permissions(&self) -> Result<Vec<Permission>>;

    // ========================================================================
    // User groups
    // ========================================================================

    /// Fetch one page of user groups; `extended` adds members and role mappings
    async fn list_user_groups(
        &self,
        params: &PaginationParams,
        extended: bool,
    ) -> Result<Page<UserGroup>>;

    /// Get a single user group
    async fn get_user_group(&self, group_id: &str) -> Result<UserGroup>;

    /// Create a user group
    async fn create_user_group(&self, request: UserGroupCreate) -> Result<UserGroup>;

    /// Update a user group
    async fn update_user_group(&self, group_id: &str, request: UserGroupUpdate) -> Result<()>;

    /// Delete a user group
    async fn delete_user_group(&self, group_id: &str) -> Result<()>;

    /// Add users to a group
    async fn add_group_users(&self, group_id: &str, user_ids: &[String]) -> Result<()>;

    /// Remove users from a group
    async fn remove_group_users(&self, group_id: &str, user_ids: &[String]) -> Result<()>;

    /// Attach role mappings to a group, returning the mappings the server created
    async fn add_group_role_mappings(
        &self,
        group_id: &str,
        role_mappings: Vec<RoleMapping>,
    ) -> Result<Vec<RoleMapping>>;

    /// Detach role mappings from a group by mapping ID
    async fn remove_group_role_mappings(
        &self,
        group_id: &str,
        mapping_ids: &[String],
    ) -> Result<()>;

    // ========================================================================
    // Excluded hours
    // ========================================================================

    /// List excluded-hours profiles
    async fn list_excluded_hours(&self) -> Result<Vec<ExcludedHoursProfile>>;

    /// Get a single excluded-hours profile
    async fn get_excluded_hours(&self, profile_id: &str) -> Result<ExcludedHoursProfile>;

    /// Create an excluded-hours profile
    async fn create_excluded_hours(
        &self,
        request: ExcludedHoursRequest,
    ) -> Result<ExcludedHoursProfile>;

    /// Replace an excluded-hours profile
    async fn update_excluded_hours(
        &self,
        profile_id: &str,
        request: ExcludedHoursRequest,
    ) -> Result<()>;

    /// Delete an excluded-hours profile
    async fn delete_excluded_hours(&self, profile_id: &str) -> Result<()>;

    // ========================================================================
    // Issue trackers
    // ========================================================================

    /// List issue tracker integrations
    async fn list_issue_trackers(&self) -> Result<Vec<IssueTracker>>;

    /// Get a single issue tracker integration
    async fn get_issue_tracker(&self, tracker_id: &str) -> Result<IssueTracker>;

    /// Create an issue tracker integration
    async fn create_issue_tracker(&self, request: IssueTrackerRequest) -> Result<IssueTracker>;

    /// Replace an issue tracker integration
    async fn update_issue_tracker(
        &self,
        tracker_id: &str,
        request: IssueTrackerRequest,
    ) -> Result<()>;

    /// Delete an issue tracker integration
    async fn delete_issue_tracker(&self, tracker_id: &str) -> Result<()>;

    /// Ask the server to try connecting with the given tracker settings
    async fn check_issue_tracker_connection(
        &self,
        config: &IssueTrackerConfig,
    ) -> Result<ConnectionStatus>;
}
