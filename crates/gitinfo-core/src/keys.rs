//! Key transformations applied before rendering.

use crate::domain::flat_map::FlatMap;

/// Copy of `map` with every key upper-cased.
pub fn upper_keys(map: &FlatMap) -> FlatMap {
    map.iter().map(|(k, v)| (k.to_uppercase(), v)).collect()
}

/// Copy of `map` with `prefix` in front of every key.
pub fn prefix_keys(prefix: &str, map: &FlatMap) -> FlatMap {
    map.iter().map(|(k, v)| (format!("{prefix}{k}"), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> FlatMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn upper_keys_uppercases_only_keys() {
        let upper = upper_keys(&map(&[("a", "abc"), ("b", "def")]));
        assert_eq!(upper, map(&[("A", "abc"), ("B", "def")]));
    }

    #[test]
    fn prefix_keys_prepends_literal() {
        let prefixed = prefix_keys("ABC_", &map(&[("a", "1"), ("b", "2")]));
        assert_eq!(prefixed, map(&[("ABC_a", "1"), ("ABC_b", "2")]));
    }

    #[test]
    fn prefix_then_upper() {
        let out = upper_keys(&prefix_keys("git_", &map(&[("commit_hash", "x")])));
        assert_eq!(out, map(&[("GIT_COMMIT_HASH", "x")]));
    }

    #[test]
    fn empty_maps_stay_empty() {
        assert!(upper_keys(&FlatMap::new()).is_empty());
        assert!(prefix_keys("p_", &FlatMap::new()).is_empty());
    }
}
