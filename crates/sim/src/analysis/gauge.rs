//! Level gauge drawn as a partially filled disk.
//!
//! A level `p ∈ [0, 1]` is shown by filling a circle from the bottom so the
//! filled *area* is `p` of the disk. The fill height is found by inverting
//! the circular-segment area function numerically.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

pub const DEFAULT_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: usize = 40;

/// Fraction of a unit disk lying below a horizontal line at normalized
/// height `h` (0 is the bottom of the disk, 1 the top).
pub fn area_below(h: f64) -> f64 {
    let above_center = h > 0.5;
    let x = if above_center {
        (h - 0.5) * 2.0
    } else {
        2.0 * (0.5 - h)
    };
    let segment = 0.5 * x * (1.0 - x * x).sqrt() + 0.5 * x.asin();
    let raw = if above_center {
        FRAC_PI_4 + segment
    } else {
        FRAC_PI_4 - segment
    };
    raw / FRAC_PI_2
}

/// Normalized fill height whose area below matches `target`.
pub fn find_fill_height(target: f64) -> f64 {
    find_fill_height_with(target, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Binary search for `h` with `|area_below(h) - target| <= tolerance`.
///
/// Stops after `max_iterations` halvings even if the tolerance has not been
/// met. Targets at or beyond the ends of `[0, 1]` return the end exactly.
pub fn find_fill_height_with(target: f64, tolerance: f64, max_iterations: usize) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    if target >= 1.0 {
        return 1.0;
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut mid = 0.5;
    for _ in 0..max_iterations {
        let area = area_below(mid);
        if (area - target).abs() <= tolerance {
            break;
        }
        if area > target {
            hi = mid;
        } else {
            lo = mid;
        }
        mid = (lo + hi) / 2.0;
    }
    mid
}

/// Gauge state: a title and the level last handed to rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGauge {
    title: String,
    level: f64,
}

impl LevelGauge {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            level: 0.0,
        }
    }

    /// Store the level to display. Values are not validated.
    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fill height for the current level.
    pub fn fill_height(&self) -> f64 {
        find_fill_height(self.level)
    }
}

impl Default for LevelGauge {
    fn default() -> Self {
        Self::new("Allele Frequency")
    }
}
