//! git-info - build-time git metadata for firmware builds
//!
//! Prints the metadata of the checked-out commit as `-D` build arguments on
//! stdout, and the same arguments one per line on stderr. Optionally writes
//! a C header and a JSON file with the same information.
//!
//! ## Outputs
//!
//! - stdout: `-DGIT_COMMIT_HASH='…' -DGIT_BRANCH='…' … -DGIT_COMMIT_HASH_8_DIGITS='…' …`
//! - `--header`: `#pragma once` followed by one `#define` per field
//! - `--json`: sorted JSON object of the raw fields

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use gitinfo_core::{collect, render, write_outputs, RenderedOutputs};

#[derive(Parser, Debug)]
#[command(name = "git-info")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Extract git info from the current repo as C build arguments",
    long_about = None
)]
struct Cli {
    /// Path to write the JSON file to
    #[arg(short = 'j', long = "json", value_name = "JSON_FILE", env = "GIT_INFO_JSON")]
    json: Option<PathBuf>,

    /// Path to write the C header file to
    #[arg(short = 'H', long = "header", value_name = "H_FILE", env = "GIT_INFO_HEADER")]
    header: Option<PathBuf>,

    /// Repository to read (default: current directory)
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stderr also carries the token dump.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    gitinfo_core::init_tracing(cli.log_json, level);

    let outputs = run(&cli.repo, cli.json.as_deref(), cli.header.as_deref())?;

    println!("{}", outputs.build_args);
    for token in &outputs.tokens {
        eprintln!("{token}");
    }
    Ok(())
}

fn run(repo: &Path, json: Option<&Path>, header: Option<&Path>) -> Result<RenderedOutputs> {
    let meta = collect(repo)
        .with_context(|| format!("Failed to read git metadata from {}", repo.display()))?;
    debug!(commit = %meta.commit_hash, "collected metadata");

    let outputs = render(&meta).context("Failed to render build outputs")?;
    write_outputs(&outputs, json, header).with_context(|| {
        format!(
            "Failed to write output files (json: {:?}, header: {:?})",
            json, header
        )
    })?;
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::process::Command as StdCommand;

    fn run_git(repo_dir: &Path, args: &[&str]) {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(repo_dir)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_and_long_flags() {
        let cli = Cli::try_parse_from(["git-info", "-j", "info.json", "--header", "repo_info.h"])
            .unwrap();
        assert_eq!(cli.json.as_deref(), Some(Path::new("info.json")));
        assert_eq!(cli.header.as_deref(), Some(Path::new("repo_info.h")));
        assert_eq!(cli.repo, PathBuf::from("."));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["git-info", "stray"]).is_err());
    }

    #[test]
    fn run_writes_header_and_json() {
        let repo = tempfile::tempdir().unwrap();
        run_git(repo.path(), &["init"]);
        run_git(repo.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(repo.path(), &["config", "user.name", "A. Uthor"]);
        run_git(repo.path(), &["config", "user.email", "author@example.com"]);
        run_git(repo.path(), &["config", "commit.gpgsign", "false"]);
        run_git(repo.path(), &["commit", "--allow-empty", "-m", "initial"]);

        let out_dir = tempfile::tempdir().unwrap();
        let json = out_dir.path().join("repo_info.json");
        let header = out_dir.path().join("repo_info.h");

        let outputs = run(repo.path(), Some(&json), Some(&header)).unwrap();

        let header_text = std::fs::read_to_string(&header).unwrap();
        assert!(header_text.starts_with("#pragma once\n"));
        assert!(header_text.contains("#define GIT_BRANCH \"main\""));
        assert!(header_text.contains("#define GIT_AUTHOR \"A. Uthor\""));

        let json_value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(json_value["branch"], "main");

        assert!(outputs.build_args.contains("-DGIT_BRANCH='main'"));
        assert!(outputs
            .tokens
            .iter()
            .any(|t| t == "-DGIT_AUTHOR=A. Uthor"));
    }

    #[test]
    fn run_fails_outside_repo() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), None, None).unwrap_err();
        assert!(err.to_string().contains("Failed to read git metadata"));
    }
}
