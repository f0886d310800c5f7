//! Functional test harness for awvs
//!
//! Provides a test context and RAII fixtures for running functional tests
//! against a real Acunetix server. Tests are opt-in via the `functional-tests`
//! feature.
//!
//! # Usage
//!
//! ```bash
//! # Read-only tests
//! cargo test --features functional-tests --test functional read_tests
//!
//! # Everything, including tests that create targets and groups
//! AWVS_FUNCTIONAL_TESTS_CONFIRM=yes cargo test --features functional-tests --test functional
//! ```

use std::env;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

#[allow(unused_imports)]
use assert_cmd::prelude::*;
use serde_json::Value;

pub mod error_tests;
pub mod mutation_tests;
pub mod read_tests;

// ============================================================================
// Test Configuration
// ============================================================================

/// Prefix for test resources to identify and clean up
pub const TEST_RESOURCE_PREFIX: &str = "awvs-functest";

/// Address used for test targets; never scanned by these tests
pub const TEST_TARGET_HOST: &str = "awvs-functest.invalid";

const MUTATION_WARNING: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║  ⚠️  MUTATION TEST WARNING                                        ║
║                                                                   ║
║  These tests create and delete targets and target groups on the   ║
║  configured Acunetix server.                                      ║
║                                                                   ║
║  To proceed, set: AWVS_FUNCTIONAL_TESTS_CONFIRM=yes               ║
╚══════════════════════════════════════════════════════════════════╝
"#;

// ============================================================================
// FunctionalTestContext
// ============================================================================

/// Context for functional tests providing command execution.
///
/// Server and credentials come from the usual sources: `AWVS_API_URL`,
/// `AWVS_API_KEY`, `AWVS_CONFIG` or the default config file.
pub struct FunctionalTestContext {
    /// Path to the awvs binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    pub fn new() -> Self {
        Self {
            binary_path: assert_cmd::cargo::cargo_bin!("awvs").to_path_buf(),
        }
    }

    /// Create a context for tests that change server state.
    ///
    /// Panics unless `AWVS_FUNCTIONAL_TESTS_CONFIRM=yes`.
    pub fn for_mutation() -> Self {
        if env::var("AWVS_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", MUTATION_WARNING);
            panic!(
                "Mutation confirmation required. Set AWVS_FUNCTIONAL_TESTS_CONFIRM=yes to proceed."
            );
        }
        Self::new()
    }

    /// Build a Command without executing it.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.env_remove("AWVS_FORMAT");
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    ///
    /// Panics if the command fails (non-zero exit code).
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("Command failed: awvs {}\nstderr: {}", args.join(" "), stderr);
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute command and expect failure, returning stderr as String.
    ///
    /// Panics if the command succeeds.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if output.status.success() {
            panic!("Command unexpectedly succeeded: awvs {}", args.join(" "));
        }

        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run a command with `--format json` and return the `data` field.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--format", "json"]);

        let stdout = self.run_success(&full);
        let mut envelope: Value =
            serde_json::from_str(&stdout).expect("command did not print JSON");
        envelope["data"].take()
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Test Resource Naming
// ============================================================================

/// Generate a unique test resource name like `awvs-functest-1706123456789`.
pub fn test_resource_name() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{}-{}", TEST_RESOURCE_PREFIX, ts)
}

/// Address for a fresh test target.
pub fn test_target_address() -> String {
    format!("https://{}/{}", TEST_TARGET_HOST, test_resource_name())
}

// ============================================================================
// RAII Fixtures
// ============================================================================

/// A target that is deleted when dropped, even if the test panics.
pub struct TestTarget {
    ctx: FunctionalTestContext,
    pub id: String,
    pub address: String,
}

impl TestTarget {
    pub fn create() -> Self {
        let ctx = FunctionalTestContext::for_mutation();
        let address = test_target_address();

        let data = ctx.run_json(&["target", "add", &address, "-d", TEST_RESOURCE_PREFIX]);
        let id = data["target_id"]
            .as_str()
            .expect("created target has no target_id")
            .to_string();
        eprintln!("[TEST] Created target: {} ({})", address, id);

        Self { ctx, id, address }
    }
}

impl Drop for TestTarget {
    fn drop(&mut self) {
        eprintln!("[TEST] Cleaning up target: {}", self.id);
        let _ = self
            .ctx
            .command(&["target", "delete", &self.id, "--yes"])
            .output();
    }
}

/// A target group that is deleted when dropped.
pub struct TestTargetGroup {
    ctx: FunctionalTestContext,
    pub id: String,
    pub name: String,
}

impl TestTargetGroup {
    pub fn create() -> Self {
        let ctx = FunctionalTestContext::for_mutation();
        let name = test_resource_name();

        let data = ctx.run_json(&["group", "create", &name]);
        let id = data["group_id"]
            .as_str()
            .expect("created group has no group_id")
            .to_string();
        eprintln!("[TEST] Created target group: {} ({})", name, id);

        Self { ctx, id, name }
    }
}

impl Drop for TestTargetGroup {
    fn drop(&mut self) {
        eprintln!("[TEST] Cleaning up target group: {}", self.id);
        let _ = self
            .ctx
            .command(&["group", "delete", &self.id, "--yes"])
            .output();
    }
}

// ============================================================================
// Unit Tests for Test Infrastructure
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_format() {
        let name = test_resource_name();
        assert!(name.starts_with(TEST_RESOURCE_PREFIX));
        let parts: Vec<&str> = name.split('-').collect();
        assert!(parts.len() >= 3); // awvs-functest-timestamp
    }

    #[test]
    fn test_target_address_uses_reserved_host() {
        let address = test_target_address();
        assert!(address.starts_with("https://awvs-functest.invalid/"));
    }
}
