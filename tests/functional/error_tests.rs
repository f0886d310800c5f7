//! Error scenario functional tests for awvs
//!
//! These tests verify that awvs returns actionable error messages when
//! operations fail.

use predicates::prelude::*;

use super::FunctionalTestContext;

const MISSING_ID: &str = "00000000-0000-0000-0000-000000000000";

fn not_found() -> impl Predicate<str> {
    predicate::str::contains("not found").or(predicate::str::contains("Not found"))
}

// ============================================================================
// Unknown IDs
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_target_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "get", MISSING_ID])
        .failure()
        .stderr(not_found());
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_scan_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["scan", "get", MISSING_ID])
        .failure()
        .stderr(not_found());
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_wait_on_nonexistent_scan_fails_fast() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["scan", "wait", MISSING_ID, "--timeout", "30"])
        .failure()
        .stderr(not_found());
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_report_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["report", "get", MISSING_ID])
        .failure()
        .stderr(not_found());
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_set_status_on_nonexistent_vuln_fails() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["vuln", "set-status", MISSING_ID, "ignored"])
        .failure()
        .stderr(predicate::str::contains("1 of 1 status updates failed"));
}

// ============================================================================
// Credentials
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_bad_api_key_suggests_login() {
    let ctx = FunctionalTestContext::new();

    ctx.command(&["target", "list", "--api-key", "definitely-not-a-valid-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("awvs login"));
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_excluded_hours_rejects_short_matrix() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["excluded-hours", "create", "awvs-functest-bad", "[true, false]"])
        .failure()
        .stderr(predicate::str::contains("168"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_tracker_test_with_missing_file() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["tracker", "test", "--config-file", "/nonexistent/tracker.json"])
        .failure()
        .stderr(predicate::str::contains("Cannot read config file"));
}
