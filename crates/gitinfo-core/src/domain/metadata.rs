//! The git metadata record collected once per invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::Result;
use crate::domain::flat_map::FlatMap;
use crate::time::{format_datetime, DEFAULT_TIME_FORMAT};

/// Length of `commit_hash_short`.
pub const SHORT_HASH_LEN: usize = 8;

/// Metadata about the checked-out commit and the build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitMetadata {
    /// Full hexadecimal commit id of HEAD.
    pub commit_hash: String,

    /// First eight characters of `commit_hash`.
    pub commit_hash_short: String,

    /// Active branch name.
    pub branch: String,

    /// Author display name of HEAD.
    pub author: String,

    /// When HEAD was authored.
    pub authored_at: DateTime<Utc>,

    /// When this build ran.
    pub built_at: DateTime<Utc>,

    /// Full commit message of HEAD.
    pub commit_msg: String,
}

impl GitMetadata {
    /// Build a record, deriving `commit_hash_short` from `commit_hash`.
    pub fn new(
        commit_hash: String,
        branch: String,
        author: String,
        authored_at: DateTime<Utc>,
        built_at: DateTime<Utc>,
        commit_msg: String,
    ) -> Self {
        let commit_hash_short = commit_hash.chars().take(SHORT_HASH_LEN).collect();
        Self {
            commit_hash,
            commit_hash_short,
            branch,
            author,
            authored_at,
            built_at,
            commit_msg,
        }
    }

    /// Field name to text, in canonical order. Dates use
    /// [`DEFAULT_TIME_FORMAT`].
    pub fn to_flat_map(&self) -> Result<FlatMap> {
        let mut map = FlatMap::new();
        map.insert("commit_hash", self.commit_hash.as_str());
        map.insert("commit_hash_short", self.commit_hash_short.as_str());
        map.insert("branch", self.branch.as_str());
        map.insert("author", self.author.as_str());
        map.insert(
            "authored_date",
            format_datetime(&self.authored_at, DEFAULT_TIME_FORMAT)?,
        );
        map.insert(
            "build_date",
            format_datetime(&self.built_at, DEFAULT_TIME_FORMAT)?,
        );
        map.insert("commit_msg", self.commit_msg.as_str());
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GitMetadata {
        GitMetadata::new(
            "1234567890abcdef".to_string(),
            "main".to_string(),
            "A. Uthor".to_string(),
            DateTime::<Utc>::from_timestamp(1570277370, 0).unwrap(),
            DateTime::<Utc>::from_timestamp(1570277400, 0).unwrap(),
            "initial\n".to_string(),
        )
    }

    #[test]
    fn short_hash_is_first_eight_chars() {
        assert_eq!(sample().commit_hash_short, "12345678");
    }

    #[test]
    fn flat_map_has_canonical_field_order() {
        let map = sample().to_flat_map().unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(
            keys,
            vec![
                "commit_hash",
                "commit_hash_short",
                "branch",
                "author",
                "authored_date",
                "build_date",
                "commit_msg",
            ]
        );
    }

    #[test]
    fn flat_map_formats_dates() {
        let map = sample().to_flat_map().unwrap();
        assert_eq!(map.get("authored_date"), Some("05.10.2019 12:09:30"));
        assert_eq!(map.get("build_date"), Some("05.10.2019 12:10:00"));
        assert_eq!(map.get("commit_msg"), Some("initial\n"));
    }

    #[test]
    fn metadata_serde_roundtrip() {
        let meta = sample();
        let json = serde_json::to_string(&meta).unwrap();
        let back: GitMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
