//! The sliding window over materialised world content.
//!
//! State is `(min_x, max_x, focal_x)`. Each tick the focal point's
//! displacement since the last slide is compared against a hysteresis
//! threshold; only a displacement beyond it translates the window. The
//! width `max_x - min_x` never changes.

/// Half-open x-range `[min, max)`.
pub type Span = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Hold,
    /// Materialise `generate`, then drop everything anchored below `evict_below`.
    SlideRight { generate: Span, evict_below: i32 },
    /// Materialise `generate`, then drop everything anchored at or right of
    /// `evict_from`.
    SlideLeft { generate: Span, evict_from: i32 },
}

impl Transition {
    #[inline]
    pub fn is_slide(&self) -> bool {
        !matches!(self, Transition::Hold)
    }
}

#[derive(Clone, Debug)]
pub struct WindowManager {
    min_x: i32,
    max_x: i32,
    focal_x: f32,
    threshold: f32,
}

impl WindowManager {
    pub fn new(min_x: i32, max_x: i32, focal_x: f32, threshold: f32) -> Self {
        assert!(min_x < max_x, "window [{min_x}, {max_x}) is empty");
        debug_assert!(threshold >= 0.0);
        Self {
            min_x,
            max_x,
            focal_x,
            threshold,
        }
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn span(&self) -> Span {
        (self.min_x, self.max_x)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Reference point displacement is measured from. It moves by the same
    /// whole-pixel shift as the edges, so the truncated remainder of a slide
    /// carries into the next delta.
    #[inline]
    pub fn focal_x(&self) -> f32 {
        self.focal_x
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Single transition per tick. The returned generation range never
    /// reaches outside the new window, even when the shift exceeds the
    /// window width.
    pub fn step(&mut self, new_focal: f32) -> Transition {
        let delta = new_focal - self.focal_x;
        let width = self.width();
        let transition = if delta > self.threshold {
            let shift = delta as i32;
            let (old_max, new_min, new_max) =
                (self.max_x, self.min_x + shift, self.max_x + shift);
            self.min_x = new_min;
            self.max_x = new_max;
            self.focal_x += shift as f32;
            Transition::SlideRight {
                generate: (old_max.max(new_min), new_max),
                evict_below: new_min,
            }
        } else if delta < -self.threshold {
            let shift = delta as i32;
            let (old_min, new_min, new_max) =
                (self.min_x, self.min_x + shift, self.max_x + shift);
            self.min_x = new_min;
            self.max_x = new_max;
            self.focal_x += shift as f32;
            Transition::SlideLeft {
                generate: (new_min, old_min.min(new_max)),
                evict_from: new_max,
            }
        } else {
            Transition::Hold
        };
        debug_assert!(self.min_x < self.max_x);
        debug_assert_eq!(self.width(), width);
        transition
    }
}
