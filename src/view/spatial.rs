//! 3D particle plot: orthographic projection onto a flat egui_plot

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points};

use super::marker_radius;
use crate::core::{box_edges, projected_extent, Camera, Figure, ParticleArtist, SpatialAxes};
use crate::theme::{colors, marker_color};

/// Depth layers used to fake perspective shading
const DEPTH_LAYERS: usize = 4;
/// Degrees of orbit per dragged screen point
const ORBIT_SPEED: f64 = 0.4;

/// Project positions and group them by depth, farthest group first.
///
/// Depth is normalised by `extent`, the radius of the projected box.
pub fn depth_buckets(
    camera: &Camera,
    positions: &[[f64; 3]],
    extent: f64,
    layers: usize,
) -> Vec<Vec<[f64; 2]>> {
    let layers = layers.max(1);
    let mut buckets = vec![Vec::new(); layers];
    let extent = extent.max(f64::EPSILON);
    for &p in positions {
        let t = ((camera.depth(p) / extent + 1.0) * 0.5).clamp(0.0, 1.0);
        let idx = ((t * layers as f64) as usize).min(layers - 1);
        buckets[idx].push(camera.project(p));
    }
    buckets
}

pub(super) fn show(
    ui: &mut egui::Ui,
    figure: &Figure,
    axes: &mut SpatialAxes,
    particles: &ParticleArtist,
) -> egui::Response {
    let limits = [axes.xlim, axes.ylim, axes.zlim];
    let extent = projected_extent(limits) * 1.05;
    let camera = axes.camera;

    ui.label(
        egui::RichText::new(format!(
            "{}  elev={:.0} azim={:.0}",
            figure.title, camera.elevation_deg, camera.azimuth_deg
        ))
        .color(colors::TEXT_MUTED)
        .size(14.0),
    );

    let marker = *particles.marker();
    let response = Plot::new("particles_spatial")
        .view_aspect(figure.aspect())
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .include_x(-extent)
        .include_x(extent)
        .include_y(-extent)
        .include_y(extent)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-extent, -extent],
                [extent, extent],
            ));

            for (a, b) in box_edges(limits) {
                let mid = [
                    0.5 * (a[0] + b[0]),
                    0.5 * (a[1] + b[1]),
                    0.5 * (a[2] + b[2]),
                ];
                let color = if camera.depth(mid) < -1e-9 {
                    colors::BOX_EDGE_HIDDEN
                } else {
                    colors::BOX_EDGE
                };
                let line = vec![camera.project(a), camera.project(b)];
                plot_ui.line(Line::new(PlotPoints::from(line)).color(color).width(1.0));
            }

            let base = marker_color(marker.color);
            let buckets = depth_buckets(&camera, particles.positions(), extent, DEPTH_LAYERS);
            for (layer, points) in buckets.into_iter().enumerate() {
                if points.is_empty() {
                    continue;
                }
                // far layers fade towards the background
                let alpha = 110 + (145 * (layer + 1) / DEPTH_LAYERS) as u8;
                let color = egui::Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .shape(egui_plot::MarkerShape::Circle)
                        .color(color)
                        .radius(marker_radius(marker.size))
                        .filled(true),
                );
            }
        })
        .response;

    if response.dragged() {
        let delta = response.drag_delta();
        axes.camera.orbit(
            -delta.x as f64 * ORBIT_SPEED,
            delta.y as f64 * ORBIT_SPEED,
        );
    }

    response
}
