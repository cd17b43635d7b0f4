//! git-info Core Library
//!
//! Collects metadata about the checked-out commit and renders it as C
//! preprocessor defines (header file and `-D` build arguments) and JSON for
//! firmware builds. Also hosts the `scp` upload helper.

pub mod domain;
pub mod format;
pub mod git;
pub mod hash_parts;
pub mod keys;
pub mod normalize;
pub mod pipeline;
pub mod telemetry;
pub mod time;
pub mod upload;

pub use domain::{FlatMap, GitInfoError, GitMetadata, Result, SHORT_HASH_LEN};

pub use format::{
    build_args, header_file, header_lines, json_document, split_build_args, PRAGMA_ONCE,
};
pub use git::{active_branch, collect, collect_at};
pub use hash_parts::{hash_part_key, hash_partitions, string_parts, MIN_HASH_LEN};
pub use keys::{prefix_keys, upper_keys};
pub use normalize::{escape_value, escape_values, quote_literal, stringify_values, RawValue};
pub use pipeline::{render, write_outputs, RenderedOutputs, KEY_PREFIX};
pub use telemetry::init_tracing;
pub use time::{format_datetime, format_time, DEFAULT_TIME_FORMAT};
pub use upload::{scp_command, upload, UPLOAD_PORT_ENV};

/// git-info version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
