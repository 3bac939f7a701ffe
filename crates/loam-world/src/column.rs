use std::iter::StepBy;
use std::ops::Range;

/// Block-aligned anchor columns inside a half-open x-range.
///
/// A column `c` belongs to `[min_x, max_x)` when `c % block_size == 0` and
/// `min_x <= c < max_x`. Abutting ranges therefore partition the columns
/// exactly, which is what lets the window slide without gaps or duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    first: i32,
    end: i32,
    step: i32,
}

#[inline]
fn align_up(v: i32, step: i32) -> i32 {
    let q = v.div_euclid(step);
    if v.rem_euclid(step) == 0 {
        q * step
    } else {
        (q + 1) * step
    }
}

impl ColumnSpan {
    /// Inverted or empty ranges give an empty span.
    pub fn new(min_x: i32, max_x: i32, block_size: i32) -> Self {
        debug_assert!(block_size > 0);
        if min_x >= max_x {
            return Self {
                first: 0,
                end: 0,
                step: block_size,
            };
        }
        let first = align_up(min_x, block_size);
        let end = align_up(max_x, block_size).max(first);
        Self {
            first,
            end,
            step: block_size,
        }
    }

    #[inline]
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Exclusive, aligned upper bound.
    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        ((self.end - self.first) / self.step) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.first
    }

    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        x >= self.first && x < self.end && x.rem_euclid(self.step) == 0
    }

    #[inline]
    pub fn nth(&self, i: usize) -> i32 {
        self.first + i as i32 * self.step
    }

    pub fn iter(&self) -> StepBy<Range<i32>> {
        (self.first..self.end).step_by(self.step as usize)
    }
}
