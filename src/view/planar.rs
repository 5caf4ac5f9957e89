//! 2D particle plot

use eframe::egui;
use egui_plot::{Plot, PlotBounds, PlotPoints, Points};

use super::marker_radius;
use crate::core::{Aspect, Figure, ParticleArtist, PlanarAxes};
use crate::theme::{colors, marker_color};

pub(super) fn show(
    ui: &mut egui::Ui,
    figure: &Figure,
    axes: &PlanarAxes,
    particles: &ParticleArtist,
) -> egui::Response {
    let (xlim, ylim) = (axes.xlim, axes.ylim);

    ui.label(
        egui::RichText::new(&figure.title)
            .color(colors::TEXT_MUTED)
            .size(14.0),
    );

    let mut plot = Plot::new("particles_planar")
        .view_aspect(figure.aspect())
        .show_axes([true, true])
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_background(false)
        .include_x(xlim.min)
        .include_x(xlim.max)
        .include_y(ylim.min)
        .include_y(ylim.max)
        .label_formatter(|_name, value| format!("x={:.3} y={:.3}", value.x, value.y));
    if axes.aspect == Aspect::Equal {
        plot = plot.data_aspect(1.0);
    }

    let marker = *particles.marker();
    plot.show(ui, |plot_ui| {
        if !axes.autoscale {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [xlim.min, ylim.min],
                [xlim.max, ylim.max],
            ));
        }

        if particles.is_empty() {
            return;
        }

        let points: PlotPoints = particles
            .positions()
            .iter()
            .map(|&[x, y, _]| [x, y])
            .collect();

        plot_ui.points(
            Points::new(points)
                .shape(egui_plot::MarkerShape::Circle)
                .color(marker_color(marker.color))
                .radius(marker_radius(marker.size))
                .filled(true),
        );
    })
    .response
}
