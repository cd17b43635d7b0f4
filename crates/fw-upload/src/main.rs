//! fw-upload - copy a built firmware image to the device
//!
//! Runs `scp <image> <remote>`. The destination comes from `--remote` or,
//! when the flag is absent, from `UPLOAD_PORT` as set by the build system.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, Level};

use gitinfo_core::upload::{describe, scp_command, upload, UPLOAD_PORT_ENV};

/// Copy a built firmware image to the device with scp.
#[derive(Parser, Debug)]
#[command(name = "fw-upload")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Firmware image to upload
    image: PathBuf,

    /// scp destination, e.g. root@device:/lib/firmware/
    #[arg(short, long, env = UPLOAD_PORT_ENV)]
    remote: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    gitinfo_core::init_tracing(false, level);

    debug!(command = ?describe(&scp_command(&cli.image, &cli.remote)), "running");
    upload(&cli.image, &cli.remote)
        .with_context(|| format!("Failed to upload {}", cli.image.display()))?;

    tracing::info!("upload finished");
    Ok(())
}
