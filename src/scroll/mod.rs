//! Scroll-driven selection of the active work.
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `geometry` | Element/viewport geometry → progress in `[0,1]` |
//! | `tracker`  | Progress → active index, with change dedup      |

mod geometry;
mod tracker;

pub use geometry::{Intersection, ScrollRange};
pub use tracker::{BucketPolicy, IndexChange, ScrollIndexTracker};
