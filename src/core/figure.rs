//! Top-level canvas description

use serde::{Deserialize, Serialize};

/// Default figure edge in inches (square canvas)
pub const DEFAULT_FIGURE_INCHES: f32 = 8.0;
/// Default resolution used to turn inches into pixels
pub const DEFAULT_DPI: f32 = 100.0;

/// Canvas that owns one axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub title: String,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(DEFAULT_FIGURE_INCHES, DEFAULT_FIGURE_INCHES)
    }
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            width_in,
            height_in,
            dpi: DEFAULT_DPI,
            title: String::from("particles"),
        }
    }

    /// Canvas size in pixels
    pub fn pixel_size(&self) -> [f32; 2] {
        [self.width_in * self.dpi, self.height_in * self.dpi]
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        if self.height_in == 0.0 {
            return 1.0;
        }
        self.width_in / self.height_in
    }
}
