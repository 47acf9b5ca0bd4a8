//! `[scroll]` section: bucketing policy of the works section.
//!
//! # Example
//!
//! ```toml
//! [scroll]
//! index_offset = 0.5   # reach the last work half a bucket early
//! max_items = 3        # only the first three works are featured
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::scroll::BucketPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Bucket count; defaults to the number of works.
    pub bucket_count: Option<usize>,
    /// Added to the bucket count.
    pub index_offset: f64,
    /// Cap on the number of works that can become active.
    pub max_items: Option<usize>,
}

impl ScrollConfig {
    pub const BUCKET_COUNT: FieldPath = FieldPath::new("scroll.bucket_count");
    pub const INDEX_OFFSET: FieldPath = FieldPath::new("scroll.index_offset");
    pub const MAX_ITEMS: FieldPath = FieldPath::new("scroll.max_items");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.bucket_count == Some(0) {
            diag.error_with_hint(
                Self::BUCKET_COUNT,
                "bucket count must be at least 1",
                "remove it to use one bucket per work",
            );
        }
        if !self.index_offset.is_finite() || self.index_offset < 0.0 {
            diag.error(
                Self::INDEX_OFFSET,
                format!("offset must be a finite, non-negative number, got {}", self.index_offset),
            );
        }
        if self.max_items == Some(0) {
            diag.error_with_hint(
                Self::MAX_ITEMS,
                "max_items = 0 disables the section",
                "remove it to let every work take part",
            );
        }
    }

    pub fn policy(&self) -> BucketPolicy {
        BucketPolicy {
            bucket_count: self.bucket_count,
            index_offset: self.index_offset,
            max_items: self.max_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_to_plain_policy() {
        let config = test_parse_config("");
        assert_eq!(config.scroll.policy(), BucketPolicy::default());
    }

    #[test]
    fn test_policy_from_toml() {
        let config = test_parse_config("[scroll]\nindex_offset = 0.5\nmax_items = 3");
        let policy = config.scroll.policy();
        assert_eq!(policy.index_offset, 0.5);
        assert_eq!(policy.max_items, Some(3));
        assert_eq!(policy.bucket_count, None);
    }

    #[test]
    fn test_validate() {
        let config = test_parse_config("[scroll]\nbucket_count = 0\nindex_offset = -1.0\nmax_items = 0");
        let mut diag = ConfigDiagnostics::new();
        config.scroll.validate(&mut diag);
        assert_eq!(diag.len(), 3);

        let config = test_parse_config("[scroll]\nbucket_count = 4\nindex_offset = 0.5");
        let mut diag = ConfigDiagnostics::new();
        config.scroll.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
