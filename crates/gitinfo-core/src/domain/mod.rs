//! Domain models for git-info.
//!
//! - `GitMetadata`: typed record of the checked-out commit
//! - `FlatMap`: ordered string map every renderer consumes
//! - `GitInfoError`: the error taxonomy

pub mod error;
pub mod flat_map;
pub mod metadata;

pub use error::{GitInfoError, Result};
pub use flat_map::FlatMap;
pub use metadata::{GitMetadata, SHORT_HASH_LEN};
