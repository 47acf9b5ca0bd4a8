//! `folio scroll`: replay progress samples through the active-work tracker.
//!
//! Useful for checking a bucketing policy against a real collection before
//! shipping it to the front end:
//!
//! ```text
//! $ folio scroll -n 5 0 0.19 0.21 0.5 1
//! 0.000  → 0
//! 0.210  → 1
//! 0.500  → 2
//! 1.000  → 4
//! ```
//!
//! With `--height` and `--viewport` the samples are element top offsets in
//! px and go through a [`ScrollRange`] first.

use anyhow::{Result, bail};

use crate::cli::{RangePreset, ScrollArgs};
use crate::config::FolioConfig;
use crate::scroll::{BucketPolicy, ScrollIndexTracker, ScrollRange};
use crate::utils::plural_count;
use crate::work::{filter_by_status, load_works};
use crate::{debug, log};

/// Tracker state after one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub progress: f64,
    pub active: Option<usize>,
    /// Whether this sample emitted a change.
    pub changed: bool,
}

/// Feed `samples` to a fresh tracker over `item_count` items.
pub fn replay(policy: BucketPolicy, item_count: usize, samples: &[f64]) -> Vec<Sample> {
    let mut tracker = ScrollIndexTracker::new(policy);
    samples
        .iter()
        .map(|&progress| {
            let changed = tracker.update(progress, item_count).is_some();
            Sample {
                progress,
                active: tracker.active(),
                changed,
            }
        })
        .collect()
}

/// Entry point of the `scroll` command.
pub fn run_scroll(args: &ScrollArgs, config: &FolioConfig) -> Result<()> {
    let titles = item_titles(args, config)?;
    let policy = config.scroll.policy();
    let active_count = policy.effective_count(titles.len());

    log!(
        "scroll";
        "{} active, {} samples",
        plural_count(active_count, "work"),
        args.samples.len()
    );
    debug!("scroll"; "{:?}", policy);

    for sample in replay(policy, titles.len(), &progress_samples(args)) {
        if !sample.changed && !args.all {
            continue;
        }
        let marker = if sample.changed { "→" } else { " " };
        match sample.active {
            Some(index) => println!("{:.3}  {marker} {index} {}", sample.progress, titles[index]),
            None => println!("{:.3}  {marker} -", sample.progress),
        }
    }
    Ok(())
}

/// Samples as progress values, converting px offsets when geometry is given.
fn progress_samples(args: &ScrollArgs) -> Vec<f64> {
    let (Some(height), Some(viewport)) = (args.height, args.viewport) else {
        return args.samples.clone();
    };
    let range = scroll_range(args.range);
    args.samples
        .iter()
        .map(|&top| range.progress(top, height, viewport))
        .collect()
}

const fn scroll_range(preset: RangePreset) -> ScrollRange {
    match preset {
        RangePreset::Contain => ScrollRange::CONTAIN,
        RangePreset::Center => ScrollRange::CENTER,
        RangePreset::EnterExit => ScrollRange::ENTER_EXIT,
    }
}

/// Work titles from `--works`, or placeholders for `--count`.
fn item_titles(args: &ScrollArgs, config: &FolioConfig) -> Result<Vec<String>> {
    match (&args.works, args.count) {
        (Some(path), _) => {
            let works = filter_by_status(load_works(path)?, &config.works.statuses);
            Ok(works.into_iter().map(|w| w.title).collect())
        }
        (None, Some(count)) => Ok(vec![String::new(); count]),
        (None, None) => bail!("either --count or --works is required"),
    }
}
