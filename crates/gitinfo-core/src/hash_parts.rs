//! Shortened commit-hash prefixes, one per length from 8 characters up to
//! the full hash.

use crate::domain::error::{GitInfoError, Result};
use crate::domain::flat_map::FlatMap;

/// Shortest prefix ever produced.
pub const MIN_HASH_LEN: usize = 8;

/// Key under which the prefix of `len` characters is stored.
pub fn hash_part_key(len: usize) -> String {
    format!("GIT_COMMIT_HASH_{len}_DIGITS")
}

/// Prefixes of `s` with character lengths `MIN_HASH_LEN..=len(s)`, shortest
/// first.
pub fn string_parts(s: &str) -> Result<Vec<&str>> {
    let ends: Vec<usize> = s
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .collect();
    if ends.len() < MIN_HASH_LEN {
        return Err(GitInfoError::HashTooShort {
            len: ends.len(),
            min: MIN_HASH_LEN,
        });
    }
    Ok(ends[MIN_HASH_LEN - 1..].iter().map(|&end| &s[..end]).collect())
}

/// Named hash prefixes for `hash`: `GIT_COMMIT_HASH_<L>_DIGITS` maps to the
/// first `L` characters.
pub fn hash_partitions(hash: &str) -> Result<FlatMap> {
    let parts = string_parts(hash)?;
    Ok(parts
        .into_iter()
        .map(|part| (hash_part_key(part.chars().count()), part))
        .collect())
}
