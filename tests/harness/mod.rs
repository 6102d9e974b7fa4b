//! Test harness utilities for warden integration tests.
//!
//! Provides an isolated test environment plus output assertion helpers.
//! Each test binary uses a different subset of these.
#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;
use uuid::Uuid;

/// Test environment with an isolated temp directory.
///
/// Every command runs with the temp directory as its working directory, so
/// each test gets its own `.warden.toml`.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a warden command acting as the given member.
    pub fn cmd(&self, member: &str) -> Command {
        let mut cmd = Command::cargo_bin("warden").expect("failed to find warden binary");
        cmd.current_dir(self.dir.path());
        cmd.env("WARDEN_MEMBER", member);
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `warden init` as the founding member.
    pub fn init(&self, founder: &str) -> Output {
        self.cmd(founder)
            .args(["init", "--name", "test-vault"])
            .output()
            .expect("failed to run warden init")
    }

    /// Shortcut for `warden member add`.
    pub fn member_add(&self, name: &str) -> Output {
        self.cmd("alice")
            .args(["member", "add", name])
            .output()
            .expect("failed to run warden member add")
    }

    /// Shortcut for `warden secret set`.
    pub fn secret_set(&self, value: &str) -> Output {
        self.cmd("alice")
            .args(["secret", "set", value])
            .output()
            .expect("failed to run warden secret set")
    }

    /// Shortcut for `warden secret totp`.
    pub fn secret_totp(&self, label: &str, seed: &str) -> Output {
        self.cmd("alice")
            .args(["secret", "totp", label, seed])
            .output()
            .expect("failed to run warden secret totp")
    }

    /// Shortcut for `warden request` as the given member.
    pub fn request_as(&self, member: &str) -> Output {
        self.cmd(member)
            .arg("request")
            .output()
            .expect("failed to run warden request")
    }

    /// Shortcut for `warden vote <id>` as the given member.
    pub fn vote_as(&self, member: &str, request_id: &str) -> Output {
        self.cmd(member)
            .args(["vote", request_id])
            .output()
            .expect("failed to run warden vote")
    }

    /// Shortcut for `warden reveal <id>` as the given member.
    pub fn reveal_as(&self, member: &str, request_id: &str) -> Output {
        self.cmd(member)
            .args(["reveal", request_id])
            .output()
            .expect("failed to run warden reveal")
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Pull the first UUID out of command output.
pub fn extract_uuid(output: &Output) -> String {
    let out = stdout(output);
    out.split_whitespace()
        .find(|token| Uuid::parse_str(token).is_ok())
        .unwrap_or_else(|| panic!("no uuid in output: {}", out))
        .to_string()
}
