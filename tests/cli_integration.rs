//! End-to-end tests for the `gw` binary.
#![cfg(unix)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `gw` isolated from the host's git and gitwrap configuration.
fn gw(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gw").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("GITWRAP_CONFIG")
        .env_remove("RUST_LOG")
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_COUNT", "1")
        .env("GIT_CONFIG_KEY_0", "init.defaultBranch")
        .env("GIT_CONFIG_VALUE_0", "master")
        .env("LC_ALL", "C");
    cmd
}

/// Temporary home plus a repository with one commit.
struct Workspace {
    home: TempDir,
    repo: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            home: TempDir::new().unwrap(),
            repo: TempDir::new().unwrap(),
        };
        ws.run(&["init"]).success();
        std::fs::write(ws.repo.path().join("README.md"), "# Test\n").unwrap();
        ws.run(&["add", "README.md"]).success();
        ws.run(&["commit", "-m", "Initial commit"]).success();
        ws
    }

    fn gw(&self) -> Command {
        let mut cmd = gw(self.home.path());
        cmd.arg("--cwd").arg(self.repo.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.gw().args(args).assert()
    }
}

#[test]
fn help_mentions_git() {
    let home = TempDir::new().unwrap();
    gw(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git"));
}

#[test]
fn version_reports_git() {
    let home = TempDir::new().unwrap();
    gw(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^git \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn version_as_json() {
    let home = TempDir::new().unwrap();
    let output = gw(home.path())
        .args(["--json", "version"])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["major"].as_u64().unwrap() >= 1);
}

#[test]
fn unknown_binary_fails() {
    let home = TempDir::new().unwrap();
    gw(home.path())
        .args(["--binary", "gitwrap-no-such-binary", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: Failed to query git version"));
}

#[test]
fn binary_flag_is_validated_like_config() {
    let home = TempDir::new().unwrap();
    gw(home.path())
        .args(["--binary", "git --exec-path=/tmp", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --binary"))
        .stderr(predicate::str::contains("must be a single non-empty word"));
}

#[test]
fn configured_binary_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".gitwrap")).unwrap();
    std::fs::write(
        home.path().join(".gitwrap/config.toml"),
        "binary = \"gitwrap-no-such-binary\"\n",
    )
    .unwrap();

    gw(home.path())
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gitwrap-no-such-binary"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".gitwrap")).unwrap();
    std::fs::write(home.path().join(".gitwrap/config.toml"), "colour = true\n").unwrap();

    gw(home.path())
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn init_creates_repository() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("project");

    gw(home.path())
        .arg("--cwd")
        .arg(&target)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized repository"));

    assert!(target.join(".git").is_dir());
}

#[test]
fn quiet_suppresses_confirmations() {
    let ws = Workspace::new();

    ws.run(&["-q", "branch", "create", "develop"])
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn head_and_branches() {
    let ws = Workspace::new();
    ws.run(&["branch", "create", "develop"]).success();

    ws.run(&["head"]).success().stdout("master\n");
    ws.run(&["branch", "list"])
        .success()
        .stdout("develop\nmaster\n");

    let output = ws.gw().args(["--json", "branch", "list"]).output().unwrap();
    let listed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, ["develop", "master"]);

    ws.run(&["checkout", "revision", "develop"]).success();
    ws.run(&["head"]).success().stdout("develop\n");
}

#[test]
fn invalid_values_are_rejected_before_git_runs() {
    let ws = Workspace::new();

    ws.run(&["branch", "create", "has space"])
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
    ws.run(&["commit", "-m", "   "])
        .failure()
        .stderr(predicate::str::contains("Invalid commit message"));
    ws.run(&["remote", "add", "origin", "not a url"])
        .failure()
        .stderr(predicate::str::contains("Invalid remote url"));
}

#[test]
fn git_failure_is_reported_with_command() {
    let ws = Workspace::new();

    ws.run(&["merge", "no-such-branch"])
        .failure()
        .stderr(predicate::str::contains("Failed to merge 'no-such-branch'"))
        .stderr(predicate::str::contains("git merge no-such-branch"));
}

#[test]
fn remotes_and_tags() {
    let ws = Workspace::new();
    let origin = TempDir::new().unwrap();
    let origin_path = origin.path().to_str().unwrap();
    gw(ws.home.path())
        .arg("--cwd")
        .arg(origin.path())
        .arg("init")
        .assert()
        .success();

    ws.run(&["remote", "add", "origin", origin_path]).success();
    ws.run(&["remote", "list"]).success().stdout("origin\n");

    ws.run(&["tag", "add", "v1.0.0", "-m", "First release"])
        .success();
    ws.run(&["tag", "list"])
        .success()
        .stdout(predicate::str::is_match(r"^v1\.0\.0\t\d{4}-\d{2}-\d{2}\tFirst release\n$").unwrap());

    ws.run(&["remote", "remove", "origin"]).success();
    ws.run(&["remote", "list"]).success().stdout("");
}

#[test]
fn completion_script() {
    let home = TempDir::new().unwrap();
    gw(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gw"));
}
