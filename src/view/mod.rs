//! egui_plot rendering of a [`PlotSetup`]
//!
//! Planar axes map straight onto a plot with fixed bounds; spatial axes are
//! projected through the axis camera and drawn with their bounding box.

mod planar;
mod spatial;

use eframe::egui;

use crate::core::{Axes, PlotSetup};

pub use spatial::depth_buckets;

/// Marker sizes are diameters; egui_plot wants a radius
pub fn marker_radius(size: f64) -> f32 {
    (size as f32 * 0.5).max(0.5)
}

/// Draw the figure. Dragging a spatial plot orbits its camera.
pub fn show_plot(ui: &mut egui::Ui, setup: &mut PlotSetup) -> egui::Response {
    let PlotSetup {
        figure,
        axes,
        particles,
    } = setup;
    match axes {
        Axes::Planar(ax) => planar::show(ui, figure, ax, particles),
        Axes::Spatial(ax) => spatial::show(ui, figure, ax, particles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_radius_is_half_size() {
        assert_eq!(marker_radius(6.0), 3.0);
        assert_eq!(marker_radius(0.0), 0.5);
    }
}
