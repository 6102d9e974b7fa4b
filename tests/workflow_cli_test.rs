//! End-to-end disclosure workflow through the CLI.

mod harness;
use harness::{
    assert_failure, assert_success, extract_uuid, stderr, stdout, TestEnv,
};

fn three_member_vault() -> TestEnv {
    let env = TestEnv::new();
    assert_success(&env.init("alice"));
    assert_success(&env.member_add("bob"));
    assert_success(&env.member_add("carol"));
    env
}

#[test]
fn test_full_disclosure_lifecycle() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let output = env.request_as("alice");
    assert_success(&output);
    let request_id = extract_uuid(&output);
    assert!(stdout(&output).contains("waiting on"));

    // requester is pre-approved, the other two must still vote
    assert_success(&env.vote_as("bob", &request_id));
    let output = env.vote_as("carol", &request_id);
    assert_success(&output);
    assert!(stdout(&output).contains("approved"));

    let output = env.reveal_as("alice", &request_id);
    assert_success(&output);
    assert!(stdout(&output).contains("hunter2"));
}

#[test]
fn test_reveal_before_quorum_fails() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let output = env.request_as("alice");
    let request_id = extract_uuid(&output);

    let output = env.reveal_as("alice", &request_id);
    assert_failure(&output);
    assert!(stderr(&output).contains("not approved"));
    assert!(!stdout(&output).contains("hunter2"));
}

#[test]
fn test_vote_after_resolution_fails() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let request_id = extract_uuid(&env.request_as("alice"));
    assert_success(&env.vote_as("bob", &request_id));
    assert_success(&env.vote_as("carol", &request_id));

    let output = env.vote_as("bob", &request_id);
    assert_failure(&output);
    assert!(stderr(&output).contains("already resolved"));
}

#[test]
fn test_outsider_cannot_vote() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let request_id = extract_uuid(&env.request_as("alice"));

    let output = env.vote_as("mallory", &request_id);
    assert_failure(&output);
    assert!(stderr(&output).contains("no vote"));
}

#[test]
fn test_denial_keeps_request_open() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let request_id = extract_uuid(&env.request_as("alice"));

    let output = env
        .cmd("bob")
        .args(["vote", &request_id, "--deny"])
        .output()
        .unwrap();
    assert_success(&output);

    // the denial does not close the request; bob can change his mind
    assert_success(&env.vote_as("bob", &request_id));
    let output = env.vote_as("carol", &request_id);
    assert_success(&output);
    assert!(stdout(&output).contains("approved"));
}

#[test]
fn test_status_reports_approvals() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));

    let request_id = extract_uuid(&env.request_as("alice"));
    assert_success(&env.vote_as("bob", &request_id));

    let output = env
        .cmd("alice")
        .args(["status", &request_id, "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("\"resolved\": false"));
    assert!(out.contains("\"carol\": false"));
    assert!(out.contains("\"bob\": true"));
}

#[test]
fn test_pending_lists_open_requests() {
    let env = three_member_vault();
    assert_success(&env.secret_set("hunter2"));
    let request_id = extract_uuid(&env.request_as("alice"));

    let output = env.cmd("alice").arg("pending").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains(&request_id));

    assert_success(&env.vote_as("bob", &request_id));
    assert_success(&env.vote_as("carol", &request_id));

    let output = env.cmd("alice").arg("pending").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("no pending requests"));
}

#[test]
fn test_single_member_vault_needs_explicit_vote() {
    let env = TestEnv::new();
    assert_success(&env.init("alice"));
    assert_success(&env.secret_set("hunter2"));

    let output = env.request_as("alice");
    assert_success(&output);
    let request_id = extract_uuid(&output);

    // the pre-approved row alone does not resolve the request
    assert_failure(&env.reveal_as("alice", &request_id));

    assert_success(&env.vote_as("alice", &request_id));
    let output = env.reveal_as("alice", &request_id);
    assert_success(&output);
    assert!(stdout(&output).contains("hunter2"));
}

#[test]
fn test_commands_before_init_hint_at_init() {
    let env = TestEnv::new();

    let output = env.cmd("alice").arg("pending").output().unwrap();
    assert_failure(&output);
    assert!(stderr(&output).contains("not initialized"));
}

#[test]
fn test_double_init_fails() {
    let env = TestEnv::new();
    assert_success(&env.init("alice"));
    assert_failure(&env.init("alice"));
}

#[test]
fn test_failed_init_leaves_no_state_behind() {
    let env = TestEnv::new();

    // a founder name validation rejects must not wedge the directory
    let output = env.init("bad name");
    assert_failure(&output);
    assert!(!env.dir.path().join(".warden.toml").exists());

    // commands still report uninitialized, and a clean init succeeds
    let output = env.cmd("alice").arg("pending").output().unwrap();
    assert_failure(&output);
    assert!(stderr(&output).contains("not initialized"));
    assert_success(&env.init("alice"));
}
