//! Scroll progress → active work index.
//!
//! The scroll region is split into equal-width progress buckets, one per
//! work, and the bucket holding the current progress is the active one.
//! Scroll distance per work is therefore even regardless of how tall each
//! work renders.
//!
//! ```text
//! progress  0.0        0.2        0.4        0.6        0.8       1.0
//!           ├──────────┼──────────┼──────────┼──────────┼──────────┤
//! index     │    0     │    1     │    2     │    3     │    4     │
//! ```

/// Bucketing policy for [`ScrollIndexTracker`].
///
/// The section variants on the site differ only here: the works section
/// uses one bucket per work, the all-works grid adds half a bucket so the
/// last work is reached slightly earlier, and the header teaser caps the
/// list to the first few featured works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketPolicy {
    /// Bucket count override; defaults to the effective item count.
    pub bucket_count: Option<usize>,
    /// Added to the bucket count before bucketing.
    pub index_offset: f64,
    /// Only the first `max_items` items take part.
    pub max_items: Option<usize>,
}

impl Default for BucketPolicy {
    fn default() -> Self {
        Self {
            bucket_count: None,
            index_offset: 0.0,
            max_items: None,
        }
    }
}

impl BucketPolicy {
    /// Number of items that can become active out of `item_count`.
    #[inline]
    pub fn effective_count(&self, item_count: usize) -> usize {
        match self.max_items {
            Some(max) => item_count.min(max),
            None => item_count,
        }
    }

    /// Map `progress` to an index in `0..effective_count(item_count)`.
    ///
    /// Returns `None` when there is nothing to select. Out-of-range and NaN
    /// progress is clamped, so `0.0` always maps to the first item and `1.0`
    /// to the last.
    #[allow(clippy::cast_precision_loss)] // item counts are far below 2^52
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // floor of a clamped, non-negative value
    pub fn compute(&self, progress: f64, item_count: usize) -> Option<usize> {
        let count = self.effective_count(item_count);
        if count == 0 {
            return None;
        }

        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let buckets = self.bucket_count.unwrap_or(count) as f64 + self.index_offset;
        let raw = (progress * buckets).floor();

        // negative bucket counts select the first item
        let index = if raw.is_finite() && raw > 0.0 {
            raw as usize
        } else {
            0
        };
        Some(index.min(count - 1))
    }
}

/// An emitted change of the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    /// Index emitted before this change, `None` on the first emission.
    pub previous: Option<usize>,
    pub current: usize,
}

/// Tracks the active index across scroll ticks and de-duplicates changes.
///
/// One tracker belongs to one scroll region. Each tick replaces the previous
/// input; only the last emitted index is kept.
///
/// # Example
///
/// ```ignore
/// let mut tracker = ScrollIndexTracker::default();
/// assert!(tracker.update(0.05, 5).is_some()); // first emission: 0
/// assert!(tracker.update(0.10, 5).is_none()); // still 0
/// assert_eq!(tracker.update(0.25, 5).unwrap().current, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScrollIndexTracker {
    policy: BucketPolicy,
    last: Option<usize>,
}

impl ScrollIndexTracker {
    pub fn new(policy: BucketPolicy) -> Self {
        Self { policy, last: None }
    }

    pub fn policy(&self) -> &BucketPolicy {
        &self.policy
    }

    /// Last emitted index, `None` while inactive.
    pub fn active(&self) -> Option<usize> {
        self.last
    }

    /// Forget the last emitted index; the next update always emits.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Feed one scroll tick.
    ///
    /// Returns the change when the active index moved. When the item list is
    /// empty the tracker goes inactive silently.
    pub fn update(&mut self, progress: f64, item_count: usize) -> Option<IndexChange> {
        let Some(current) = self.policy.compute(progress, item_count) else {
            self.last = None;
            return None;
        };

        if self.last == Some(current) {
            return None;
        }

        let change = IndexChange {
            previous: self.last,
            current,
        };
        self.last = Some(current);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(progress: f64, count: usize) -> usize {
        BucketPolicy::default().compute(progress, count).unwrap()
    }

    #[test]
    fn test_empty_list_is_inactive() {
        assert_eq!(BucketPolicy::default().compute(0.5, 0), None);
        let capped = BucketPolicy {
            max_items: Some(0),
            ..Default::default()
        };
        assert_eq!(capped.compute(0.5, 4), None);
    }

    #[test]
    fn test_edges() {
        for n in 1..=12 {
            assert_eq!(plain(0.0, n), 0, "start for {n}");
            assert_eq!(plain(1.0, n), n - 1, "end for {n}");
        }
    }

    #[test]
    fn test_in_bounds_and_monotonic() {
        for n in 1..=9 {
            let mut prev = 0;
            for step in 0..=200 {
                let progress = f64::from(step) / 200.0;
                let index = plain(progress, n);
                assert!(index < n);
                assert!(index >= prev, "not monotonic at {progress} for {n}");
                prev = index;
            }
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(plain(-0.5, 5), plain(0.0, 5));
        assert_eq!(plain(1.5, 5), plain(1.0, 5));
        assert_eq!(plain(f64::NEG_INFINITY, 5), 0);
        assert_eq!(plain(f64::INFINITY, 5), 4);
        assert_eq!(plain(f64::NAN, 5), 0);
    }

    #[test]
    fn test_five_works_scenario() {
        let indices: Vec<_> = [0.0, 0.21, 0.41, 0.61, 0.81, 1.0]
            .into_iter()
            .map(|p| plain(p, 5))
            .collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_half_bucket_offset() {
        let policy = BucketPolicy {
            index_offset: 0.5,
            ..Default::default()
        };
        // 4 works → 4.5 buckets: the last work starts at 3/4.5 ≈ 0.667
        assert_eq!(policy.compute(0.6, 4), Some(2));
        assert_eq!(policy.compute(0.7, 4), Some(3));
        assert_eq!(policy.compute(1.0, 4), Some(3));
    }

    #[test]
    fn test_bucket_override_and_cap() {
        let featured = BucketPolicy {
            max_items: Some(3),
            ..Default::default()
        };
        assert_eq!(featured.compute(0.5, 10), Some(1));
        assert_eq!(featured.compute(1.0, 10), Some(2));
        assert_eq!(featured.compute(1.0, 2), Some(1));

        let coarse = BucketPolicy {
            bucket_count: Some(2),
            ..Default::default()
        };
        assert_eq!(coarse.compute(0.4, 6), Some(0));
        assert_eq!(coarse.compute(0.6, 6), Some(1));
    }

    #[test]
    fn test_negative_bucket_count_selects_first() {
        let policy = BucketPolicy {
            bucket_count: Some(0),
            index_offset: -1.0,
            ..Default::default()
        };
        assert_eq!(policy.compute(0.9, 3), Some(0));
    }

    #[test]
    fn test_tracker_deduplicates() {
        let mut tracker = ScrollIndexTracker::default();
        assert_eq!(
            tracker.update(0.0, 5),
            Some(IndexChange {
                previous: None,
                current: 0
            })
        );
        assert_eq!(tracker.update(0.1, 5), None);
        assert_eq!(tracker.update(0.19, 5), None);
        assert_eq!(
            tracker.update(0.21, 5),
            Some(IndexChange {
                previous: Some(0),
                current: 1
            })
        );
        assert_eq!(tracker.active(), Some(1));

        // scrolling back up emits too
        assert_eq!(tracker.update(0.0, 5).map(|c| c.current), Some(0));
    }

    #[test]
    fn test_tracker_goes_inactive_on_empty_list() {
        let mut tracker = ScrollIndexTracker::default();
        tracker.update(0.9, 5);
        assert_eq!(tracker.active(), Some(4));

        assert_eq!(tracker.update(0.9, 0), None);
        assert_eq!(tracker.active(), None);

        // items back: emits even though the index equals the old one
        assert_eq!(
            tracker.update(0.9, 5),
            Some(IndexChange {
                previous: None,
                current: 4
            })
        );
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = ScrollIndexTracker::new(BucketPolicy::default());
        tracker.update(0.5, 3);
        tracker.reset();
        assert_eq!(tracker.active(), None);
        assert!(tracker.update(0.5, 3).is_some());
    }
}
