//! Git integration: collect HEAD metadata from a working copy.

use std::path::Path;
use std::process::{Command, Output};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::error::{GitInfoError, Result};
use crate::domain::metadata::GitMetadata;
use crate::normalize::{stringify_values, RawValue};

/// `git log` format for hash, author name, author timestamp and raw message,
/// NUL-separated.
const LOG_FORMAT: &str = "--format=format:%H%x00%an%x00%at%x00%B";

fn run_git(repo_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .map_err(|e| GitInfoError::Git(format!("failed to run git: {e}")))
}

/// Collect metadata for HEAD of the repository at `repo_dir`, stamping the
/// build time with the current clock.
pub fn collect(repo_dir: &Path) -> Result<GitMetadata> {
    collect_at(repo_dir, Utc::now())
}

/// Like [`collect`] with an explicit build time.
pub fn collect_at(repo_dir: &Path, built_at: DateTime<Utc>) -> Result<GitMetadata> {
    let output = run_git(repo_dir, &["log", "-1", LOG_FORMAT])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitInfoError::Git(format!("git log -1 failed: {stderr}")));
    }

    let mut parts = output.stdout.splitn(4, |b| *b == 0);
    let mut next_part = |field: &'static str| -> Result<(&'static str, RawValue)> {
        parts
            .next()
            .map(|bytes| (field, RawValue::Bytes(bytes.to_vec())))
            .ok_or_else(|| GitInfoError::Git(format!("git log output is missing {field}")))
    };
    let raw = [
        next_part("commit_hash")?,
        next_part("author")?,
        next_part("authored_timestamp")?,
        next_part("commit_msg")?,
    ];
    let fields = stringify_values(raw)?;

    // All four keys were inserted above.
    let field = |name: &str| fields.get(name).unwrap_or_default().to_string();

    let commit_hash = field("commit_hash");
    if commit_hash.is_empty() {
        return Err(GitInfoError::Git(
            "git log returned an empty commit hash".to_string(),
        ));
    }

    let timestamp = field("authored_timestamp");
    let authored_at = timestamp
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or_else(|| GitInfoError::InvalidTimestamp(timestamp.clone()))?;

    let branch = active_branch(repo_dir)?;

    let meta = GitMetadata::new(
        commit_hash,
        branch,
        field("author"),
        authored_at,
        built_at,
        field("commit_msg"),
    );
    debug!(
        commit = %meta.commit_hash,
        branch = %meta.branch,
        author = %meta.author,
        "collected git metadata"
    );
    Ok(meta)
}

/// Name of the branch HEAD points to.
///
/// Fails with [`GitInfoError::DetachedHead`] when HEAD is not a branch.
pub fn active_branch(repo_dir: &Path) -> Result<String> {
    let output = run_git(repo_dir, &["symbolic-ref", "--quiet", "--short", "HEAD"])?;
    if !output.status.success() {
        if output.status.code() == Some(1) {
            return Err(GitInfoError::DetachedHead);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitInfoError::Git(format!(
            "git symbolic-ref HEAD failed: {stderr}"
        )));
    }

    let branch = RawValue::Bytes(output.stdout).into_text("branch")?;
    Ok(branch.trim().to_string())
}
