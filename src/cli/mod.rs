//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::{Criticality, FULL_SCAN_PROFILE_ID, ReportSourceType, VulnerabilityStatus};

pub mod args;
pub mod context;
pub mod excluded_hours;
pub mod export;
pub mod group;
pub mod handlers;
pub mod login;
pub mod profile;
pub mod report;
pub mod role;
pub mod scan;
pub mod status;
pub mod target;
pub mod template;
pub mod tracker;
pub mod user;
pub mod user_group;
pub mod vuln;

pub use args::{LimitArgs, ListArgs, OutputFormat, WaitArgs};
pub use context::CommandContext;

/// AWVS CLI - Command-line companion for the Acunetix vulnerability scanner
#[derive(Parser, Debug)]
#[command(name = "awvs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AWVS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "AWVS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Acunetix server URL (e.g. https://acunetix.example.com:3443)
    #[arg(long, global = true, env = "AWVS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Acunetix API key
    #[arg(
        long,
        global = true,
        env = "AWVS_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Skip TLS certificate verification (self-signed scanner certificates)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "AWVS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save server URL and API key after checking they work
    Login,

    /// Show configuration and connectivity status
    Status,

    /// Display version information
    Version,

    /// Manage scan targets
    #[command(subcommand, visible_alias = "targets")]
    Target(TargetCommands),

    /// Manage target groups
    #[command(subcommand, visible_alias = "groups")]
    Group(GroupCommands),

    /// Start, watch, and inspect scans
    #[command(subcommand, visible_alias = "scans")]
    Scan(ScanCommands),

    /// List scanning profiles
    #[command(subcommand, visible_alias = "profiles")]
    Profile(ProfileCommands),

    /// List report templates
    #[command(subcommand, visible_alias = "templates")]
    Template(TemplateCommands),

    /// Generate and manage reports
    #[command(subcommand, visible_alias = "reports")]
    Report(ReportCommands),

    /// Create and manage exports
    #[command(subcommand, visible_alias = "exports")]
    Export(ExportCommands),

    /// Browse and triage vulnerabilities
    #[command(subcommand, visible_aliases = ["vulns", "vulnerability"])]
    Vuln(VulnCommands),

    /// Manage users
    #[command(subcommand, visible_alias = "users")]
    User(UserCommands),

    /// Manage roles and list permissions
    #[command(subcommand, visible_alias = "roles")]
    Role(RoleCommands),

    /// Manage user groups
    #[command(subcommand, visible_alias = "user-groups")]
    UserGroup(UserGroupCommands),

    /// Manage excluded-hours profiles
    #[command(subcommand)]
    ExcludedHours(ExcludedHoursCommands),

    /// Manage issue tracker integrations
    #[command(subcommand, visible_alias = "trackers")]
    Tracker(TrackerCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   awvs completion bash > /etc/bash_completion.d/awvs
  zsh:    awvs completion zsh > \"${fpath[1]}/_awvs\"
  fish:   awvs completion fish > ~/.config/fish/completions/awvs.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Target subcommands
#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    /// List targets
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            awvs target list                         # All targets\n  \
            awvs target list -n 10                   # First 10\n  \
            awvs target list -q 'text_search:*shop'  # Server-side filter\n  \
            awvs target list --format json | jq '.data[].id'"
    )]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show target details
    Get {
        /// Target ID
        target_id: String,
    },

    /// Add a target
    #[command(after_help = "EXAMPLES:\n  \
            awvs target add http://testphp.vulnweb.com\n  \
            awvs target add https://shop.example.com -d \"Shop\" --criticality high")]
    Add {
        /// Target address (e.g. http://example.com)
        address: String,

        /// Description
        #[arg(long, short = 'd', default_value = "")]
        description: String,

        /// Business criticality
        #[arg(long, value_enum, default_value = "normal")]
        criticality: Criticality,
    },

    /// Update a target's description or criticality
    Update {
        /// Target ID
        target_id: String,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New business criticality
        #[arg(long, value_enum)]
        criticality: Option<Criticality>,
    },

    /// Delete a target
    Delete {
        /// Target ID
        target_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Target group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// List target groups
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show target group details
    Get {
        /// Group ID
        group_id: String,
    },

    /// Create a target group
    Create {
        /// Group name
        name: String,

        /// Description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Rename or re-describe a target group
    Update {
        /// Group ID
        group_id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Delete a target group
    Delete {
        /// Group ID
        group_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// List scans
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show scan details and current status
    #[command(visible_alias = "status")]
    Get {
        /// Scan ID
        scan_id: String,
    },

    /// Start a scan against a target
    #[command(after_help = "EXAMPLES:\n  \
            awvs scan start <target-id>                    # Full scan, return immediately\n  \
            awvs scan start <target-id> --wait             # Block until finished\n  \
            awvs scan start <target-id> --wait --timeout 3600")]
    Start {
        /// Target ID
        target_id: String,

        /// Scanning profile ID (see `awvs profile list`)
        #[arg(long, short = 'p', default_value = FULL_SCAN_PROFILE_ID)]
        profile: String,

        /// Wait for the scan to finish
        #[arg(long, short = 'w')]
        wait: bool,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// Wait for a running scan to finish
    Wait {
        /// Scan ID
        scan_id: String,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// List past runs of a scan
    Runs {
        /// Scan ID
        scan_id: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List vulnerabilities found by a scan
    Results {
        /// Scan ID
        scan_id: String,

        /// Result (run) ID; defaults to the current session
        #[arg(long, short = 'r')]
        result: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Abort a running scan
    #[command(visible_alias = "stop")]
    Abort {
        /// Scan ID
        scan_id: String,
    },

    /// Delete a scan and its results
    Delete {
        /// Scan ID
        scan_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Add a target, scan it, wait, and list what was found
    #[command(after_help = "EXAMPLES:\n  \
            awvs scan run http://testphp.vulnweb.com\n  \
            awvs scan run https://staging.example.com --cleanup --timeout 7200")]
    Run {
        /// Address to scan
        address: String,

        /// Target description
        #[arg(long, short = 'd', default_value = "Added by awvs scan run")]
        description: String,

        /// Scanning profile ID
        #[arg(long, short = 'p', default_value = FULL_SCAN_PROFILE_ID)]
        profile: String,

        /// Delete the target afterwards
        #[arg(long)]
        cleanup: bool,

        #[command(flatten)]
        wait_args: WaitArgs,
    },
}

/// Scanning profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List scanning profiles
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: LimitArgs,
    },

    /// Show a scanning profile
    Get {
        /// Profile ID
        profile_id: String,
    },
}

/// Report template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List report templates
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: LimitArgs,
    },

    /// Show a report template
    Get {
        /// Template ID
        template_id: String,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List reports
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a report and its download links
    Get {
        /// Report ID
        report_id: String,
    },

    /// Generate a report
    #[command(after_help = "EXAMPLES:\n  \
            awvs report generate <template-id> scans <scan-id>\n  \
            awvs report generate <template-id> targets <t1> <t2> --wait")]
    Generate {
        /// Report template ID (see `awvs template list`)
        template_id: String,

        /// What the report covers
        #[arg(value_enum)]
        source: ReportSourceType,

        /// IDs of the source items
        #[arg(required = true)]
        ids: Vec<String>,

        /// Wait for generation to finish
        #[arg(long, short = 'w')]
        wait: bool,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// Wait for a report to finish generating
    Wait {
        /// Report ID
        report_id: String,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// Delete a report
    Delete {
        /// Report ID
        report_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// List available export types
    Types {
        #[command(flatten)]
        list: LimitArgs,
    },

    /// Create an export
    Create {
        /// Export type ID (see `awvs export types`)
        export_type_id: String,

        /// What the export covers
        #[arg(value_enum)]
        source: ReportSourceType,

        /// IDs of the source items
        #[arg(required = true)]
        ids: Vec<String>,

        /// WAF to push the export to
        #[arg(long)]
        waf_id: Option<String>,

        /// Wait for the export to finish
        #[arg(long, short = 'w')]
        wait: bool,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// Show an export and its download links
    Get {
        /// Export ID
        export_id: String,
    },

    /// Wait for an export to finish
    Wait {
        /// Export ID
        export_id: String,

        #[command(flatten)]
        wait_args: WaitArgs,
    },

    /// Delete an export
    Delete {
        /// Export ID
        export_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Vulnerability subcommands
#[derive(Subcommand, Debug)]
pub enum VulnCommands {
    /// List vulnerabilities
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            awvs vuln list -q 'severity:3,4;status:open'\n  \
            awvs vuln list -s 'last_seen:desc' -n 20"
    )]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show vulnerability details
    Get {
        /// Vulnerability ID
        vuln_id: String,
    },

    /// Set the triage status of one or more vulnerabilities
    #[command(
        visible_alias = "update-status",
        after_help = "EXAMPLES:\n  \
            awvs vuln set-status v1,v2 fixed\n  \
            awvs vuln set-status v3 false_positive --comment \"WAF blocks this\""
    )]
    SetStatus {
        /// Vulnerability IDs, comma-separated
        #[arg(value_delimiter = ',', required = true)]
        vuln_ids: Vec<String>,

        /// New status
        #[arg(value_enum)]
        status: VulnerabilityStatus,

        /// Comment recorded with the change
        #[arg(long, short = 'c')]
        comment: Option<String>,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show user details
    Get {
        /// User ID
        user_id: String,
    },

    /// Create a user
    Create(user::UserCreateArgs),

    /// Update a user
    Update(user::UserUpdateArgs),

    /// Delete a user
    Delete {
        /// User ID
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Role subcommands
#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// List roles
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show role details
    Get {
        /// Role ID
        role_id: String,
    },

    /// Create a role
    #[command(after_help = "EXAMPLES:\n  \
            awvs role create Tester --permissions scanning.view,scanning.edit")]
    Create {
        /// Role name
        name: String,

        /// Role description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Permission names, comma-separated (see `awvs role permissions`)
        #[arg(long, value_delimiter = ',', required = true)]
        permissions: Vec<String>,
    },

    /// Update a role
    Update {
        /// Role ID
        role_id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Replace permissions (comma-separated)
        #[arg(long, value_delimiter = ',')]
        permissions: Option<Vec<String>>,
    },

    /// Delete a role
    Delete {
        /// Role ID
        role_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the permissions a role can hold
    Permissions {
        #[command(flatten)]
        list: LimitArgs,
    },
}

/// User group subcommands
#[derive(Subcommand, Debug)]
pub enum UserGroupCommands {
    /// List user groups
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Include members and role mappings (JSON output)
        #[arg(long)]
        extended: bool,
    },

    /// Show user group details
    Get {
        /// User group ID
        group_id: String,
    },

    /// Create a user group
    Create(user_group::UserGroupCreateArgs),

    /// Update a user group
    Update(user_group::UserGroupUpdateArgs),

    /// Delete a user group
    Delete {
        /// User group ID
        group_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Add users to a group
    AddUsers {
        /// User group ID
        group_id: String,

        /// User IDs, comma-separated
        #[arg(value_delimiter = ',', required = true)]
        user_ids: Vec<String>,
    },

    /// Remove users from a group
    RemoveUsers {
        /// User group ID
        group_id: String,

        /// User IDs, comma-separated
        #[arg(value_delimiter = ',', required = true)]
        user_ids: Vec<String>,
    },

    /// Attach role mappings to a group
    #[command(after_help = "EXAMPLES:\n  \
            awvs user-group add-role-mappings <group-id> '[{\"role_id\": \"<role-id>\", \"access_all_targets\": true}]'")]
    AddRoleMappings {
        /// User group ID
        group_id: String,

        /// Role mappings as a JSON array
        role_mappings: String,
    },

    /// Detach role mappings from a group
    RemoveRoleMappings {
        /// User group ID
        group_id: String,

        /// Role mapping IDs, comma-separated
        #[arg(value_delimiter = ',', required = true)]
        mapping_ids: Vec<String>,
    },
}

/// Excluded-hours subcommands
#[derive(Subcommand, Debug)]
pub enum ExcludedHoursCommands {
    /// List excluded-hours profiles
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: LimitArgs,
    },

    /// Show an excluded-hours profile
    Get {
        /// Profile ID
        profile_id: String,
    },

    /// Create an excluded-hours profile
    #[command(after_help = "The matrix is a JSON array of 168 booleans, one per hour of the \
week starting Sunday 00:00; true means scanning is not allowed.")]
    Create {
        /// Profile name
        name: String,

        /// Exclusion matrix (JSON array of 168 booleans)
        matrix: String,

        /// Minutes east of UTC
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        time_offset: i32,
    },

    /// Update an excluded-hours profile
    Update {
        /// Profile ID
        profile_id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New exclusion matrix (JSON array of 168 booleans)
        #[arg(long)]
        matrix: Option<String>,

        /// New offset in minutes east of UTC
        #[arg(long, allow_hyphen_values = true)]
        time_offset: Option<i32>,
    },

    /// Delete an excluded-hours profile
    Delete {
        /// Profile ID
        profile_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Issue tracker subcommands
#[derive(Subcommand, Debug)]
pub enum TrackerCommands {
    /// List issue trackers
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: LimitArgs,
    },

    /// Show an issue tracker
    Get {
        /// Tracker ID
        tracker_id: String,
    },

    /// Create an issue tracker from a JSON settings file
    Create {
        /// Tracker name
        name: String,

        /// JSON file with platform, url, auth, project, and issue type
        #[arg(long, required = true)]
        config_file: String,
    },

    /// Update an issue tracker
    Update {
        /// Tracker ID
        tracker_id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// JSON file with replacement settings
        #[arg(long)]
        config_file: Option<String>,
    },

    /// Delete an issue tracker
    Delete {
        /// Tracker ID
        tracker_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Check that the server can reach an issue tracker
    #[command(after_help = "EXAMPLES:\n  \
            awvs tracker test <tracker-id>\n  \
            awvs tracker test --config-file jira.json")]
    Test {
        /// Stored tracker to test
        #[arg(required_unless_present = "config_file")]
        tracker_id: Option<String>,

        /// Test unsaved settings from a JSON file instead
        #[arg(long, conflicts_with = "tracker_id")]
        config_file: Option<String>,
    },
}
