//! Element geometry → scroll progress.
//!
//! A scroll range is described by two intersections between a point on the
//! tracked element and a point on the viewport, the same way the site's
//! animation layer describes them (`"start end"`, `"end start"`, ...).
//! Progress is 0 when the start intersection is reached and 1 at the end one.

/// A point on the element meeting a point on the viewport.
///
/// Both values are fractions along the vertical axis: 0 is the top edge,
/// 0.5 the center, 1 the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    /// Scroll distance still needed until this intersection is reached.
    /// Negative once it has been passed.
    #[inline]
    fn remaining(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        rect_top + self.target * rect_height - self.viewport * viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollRange {
    /// Element top meets viewport top → element bottom meets viewport bottom.
    ///
    /// Used by sticky sections taller than the viewport.
    pub const CONTAIN: Self = Self {
        start: Intersection::new(0.0, 0.0),
        end: Intersection::new(1.0, 1.0),
    };

    /// Element top crosses viewport center → element bottom crosses it.
    pub const CENTER: Self = Self {
        start: Intersection::new(0.0, 0.5),
        end: Intersection::new(1.0, 0.5),
    };

    /// Element enters at the viewport bottom → leaves at the viewport top.
    pub const ENTER_EXIT: Self = Self {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 0.0),
    };

    pub const fn new(start: Intersection, end: Intersection) -> Self {
        Self { start, end }
    }

    /// Progress through this range, clamped to `[0, 1]`.
    ///
    /// `rect_top` is the element's top relative to the viewport top (as
    /// reported by `getBoundingClientRect`), so it goes negative once the
    /// element scrolls past the top.
    ///
    /// A range with no scroll length (e.g. a contained section no taller than
    /// the viewport) is either not started (0) or finished (1).
    pub fn progress(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        let to_start = self.start.remaining(rect_top, rect_height, viewport_height);
        let to_end = self.end.remaining(rect_top, rect_height, viewport_height);
        let length = to_end - to_start;

        if !length.is_finite() || length <= 0.0 {
            return if to_start < 0.0 { 1.0 } else { 0.0 };
        }

        let progress = -to_start / length;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}
