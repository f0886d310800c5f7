//! Mutation functional tests for awvs
//!
//! Each test creates resources named with the `awvs-functest-*` prefix and
//! cleans them up automatically.
//!
//! **IMPORTANT**: These tests modify data and require
//! `AWVS_FUNCTIONAL_TESTS_CONFIRM=yes`.

use predicates::prelude::*;

use super::{
    FunctionalTestContext, TEST_RESOURCE_PREFIX, TestTarget, TestTargetGroup, test_resource_name,
    test_target_address,
};

// ============================================================================
// Targets
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_add_and_auto_cleanup() {
    let target = TestTarget::create();
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "get", &target.id])
        .success()
        .stdout(predicate::str::contains(&target.address));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_update_changes_criticality() {
    let target = TestTarget::create();
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "update", &target.id, "--criticality", "high"])
        .success();

    let data = ctx.run_json(&["target", "get", &target.id]);
    assert_eq!(data["criticality"], 20);
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_update_without_fields_fails() {
    let target = TestTarget::create();
    let ctx = FunctionalTestContext::new();

    ctx.run(&["target", "update", &target.id])
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_target_delete_with_yes_flag() {
    let ctx = FunctionalTestContext::for_mutation();
    let address = test_target_address();

    let data = ctx.run_json(&["target", "add", &address, "-d", TEST_RESOURCE_PREFIX]);
    let id = data["target_id"].as_str().expect("no target_id").to_string();

    ctx.run(&["target", "delete", &id, "--yes"])
        .success()
        .stderr(predicate::str::contains("Deleted"));

    ctx.run(&["target", "get", &id]).failure();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_created_target_is_listed() {
    let target = TestTarget::create();
    let ctx = FunctionalTestContext::new();

    let query = format!("text_search:*{}", target.address);
    ctx.run(&["target", "list", "--query", &query])
        .success()
        .stdout(predicate::str::contains(&target.id));
}

// ============================================================================
// Target Groups
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_group_create_and_rename() {
    let group = TestTargetGroup::create();
    let ctx = FunctionalTestContext::new();
    let renamed = format!("{}-renamed", group.name);

    ctx.run(&["group", "update", &group.id, "--name", &renamed])
        .success();

    ctx.run(&["group", "get", &group.id])
        .success()
        .stdout(predicate::str::contains(&renamed));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_group_create_duplicate_fails() {
    let group = TestTargetGroup::create();
    let ctx = FunctionalTestContext::new();

    let stderr = ctx.run_failure(&["group", "create", &group.name]);
    assert!(
        stderr.contains("Conflict") || stderr.contains("exists"),
        "unexpected error: {}",
        stderr
    );
}

// ============================================================================
// Excluded Hours
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_excluded_hours_create_and_delete() {
    let ctx = FunctionalTestContext::for_mutation();
    let name = test_resource_name();
    // Sunday and Saturday excluded all day
    let hours: Vec<bool> = (0..168).map(|h| h < 24 || h >= 144).collect();
    let matrix = serde_json::to_string(&hours).unwrap();

    let data = ctx.run_json(&["excluded-hours", "create", &name, &matrix]);
    let id = data["excluded_hours_id"]
        .as_str()
        .expect("no excluded_hours_id")
        .to_string();

    ctx.run(&["excluded-hours", "get", &id])
        .success()
        .stdout(predicate::str::contains(&name));

    ctx.run(&["excluded-hours", "delete", &id, "--yes"])
        .success();
}
