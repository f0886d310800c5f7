//! Read-only functional tests for awvs
//!
//! These tests do not modify any data and are safe to run against any server.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_reports_connection() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Connected: Acunetix"));
}

// ============================================================================
// Targets and Groups
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    // May return empty list, but should succeed
    ctx.run(&["target", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_list_respects_limit() {
    let ctx = FunctionalTestContext::new();

    let data = ctx.run_json(&["target", "list", "--limit", "2"]);
    let items = data.as_array().expect("target list is not an array");
    assert!(items.len() <= 2);
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_list_with_sort() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "list", "--sort", "address:asc", "--limit", "5"])
        .success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_group_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["group", "list"]).success();
}

// ============================================================================
// Scans
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_scan_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["scan", "list", "--limit", "10"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_scan_get_first_scan() {
    let ctx = FunctionalTestContext::new();

    let data = ctx.run_json(&["scan", "list", "--limit", "1"]);
    let Some(scan_id) = data[0]["scan_id"].as_str() else {
        eprintln!("No scans on the server; skipping");
        return;
    };

    ctx.run(&["scan", "get", scan_id])
        .success()
        .stdout(predicate::str::contains(scan_id));
}

// ============================================================================
// Catalogues
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_profile_list_includes_full_scan() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["profile", "list"])
        .success()
        .stdout(predicate::str::contains("Full Scan"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_template_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["template", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_export_types_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["export", "types"]).success();
}

// ============================================================================
// Findings and Reports
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_vuln_list_with_filter() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["vuln", "list", "--query", "status:open", "--limit", "5"])
        .success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_report_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["report", "list", "--limit", "5"]).success();
}

// ============================================================================
// Administration
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_excluded_hours_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["excluded-hours", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_tracker_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["tracker", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_role_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["role", "list"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_role_permissions_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["role", "permissions"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_user_group_list_succeeds() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["user-group", "list", "--extended"]).success();
}
