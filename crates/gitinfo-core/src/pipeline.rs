//! Metadata to build outputs: JSON document, C header, build-argument
//! string and its shell-split tokens.

use std::path::Path;

use tracing::debug;

use crate::domain::error::Result;
use crate::domain::metadata::GitMetadata;
use crate::format::{build_args, header_file, json_document, split_build_args};
use crate::hash_parts::hash_partitions;
use crate::keys::prefix_keys;
use crate::normalize::{escape_value, escape_values};

/// Prefix applied to every metadata key in the header and build arguments.
pub const KEY_PREFIX: &str = "git_";

/// Everything one run emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputs {
    /// Sorted, indented JSON of the unescaped, unprefixed fields.
    pub json: String,
    /// Header text starting with `#pragma once`.
    pub header: String,
    /// The line printed to stdout.
    pub build_args: String,
    /// `build_args` after shell-word splitting, printed to stderr.
    pub tokens: Vec<String>,
}

/// Render all outputs for `meta`. Pure; nothing is written.
pub fn render(meta: &GitMetadata) -> Result<RenderedOutputs> {
    let fields = meta.to_flat_map()?;
    let json = json_document(&fields)?;

    let git_info = prefix_keys(KEY_PREFIX, &escape_values(&fields));

    let hash_info = escape_values(&hash_partitions(&escape_value(&meta.commit_hash))?);

    let header = header_file(&git_info, &hash_info);

    let build_args = format!("{} {}", build_args(&git_info), build_args(&hash_info));
    let tokens = split_build_args(&build_args)?;

    debug!(
        fields = git_info.len(),
        hash_parts = hash_info.len(),
        "rendered build outputs"
    );
    Ok(RenderedOutputs {
        json,
        header,
        build_args,
        tokens,
    })
}

/// Write the requested files. Files already written stay in place if a later
/// write fails.
pub fn write_outputs(
    outputs: &RenderedOutputs,
    json_path: Option<&Path>,
    header_path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = json_path {
        std::fs::write(path, &outputs.json)?;
        debug!(path = %path.display(), "wrote JSON metadata");
    }
    if let Some(path) = header_path {
        std::fs::write(path, &outputs.header)?;
        debug!(path = %path.display(), "wrote header");
    }
    Ok(())
}
