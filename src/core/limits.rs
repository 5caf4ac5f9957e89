//! Axis limits derived from the simulation box

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` along one coordinate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "limits out of order: {min} > {max}");
        Self { min, max }
    }

    /// Bounds of a box of side `box_length` centred on the origin
    pub fn symmetric(box_length: f64) -> Self {
        let half = 0.5 * box_length;
        Self::new(-half, half)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
