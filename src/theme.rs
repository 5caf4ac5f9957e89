//! Viewer palette: dark chrome around a plot that keeps the marker colours

use egui::Color32;

use crate::core::MarkerColor;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 12);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(22, 22, 26);
    pub const BG_HOVER: Color32 = Color32::from_rgb(34, 34, 40);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 90);

    // === Plot ===
    pub const BORDER: Color32 = Color32::from_rgb(48, 48, 54);
    /// Bounding-box edges of the spatial axis
    pub const BOX_EDGE: Color32 = Color32::from_rgb(120, 120, 130);
    /// Edges behind the particle cloud
    pub const BOX_EDGE_HIDDEN: Color32 = Color32::from_rgb(60, 60, 66);

    pub const STATUS_OK: Color32 = Color32::from_rgb(100, 200, 100);
    pub const STATUS_WAIT: Color32 = Color32::from_rgb(200, 200, 100);
    pub const STATUS_BAD: Color32 = Color32::from_rgb(200, 100, 100);
}

/// Marker fill; a bit lighter than pure blue so it reads on a dark plot
pub fn marker_color(color: MarkerColor) -> Color32 {
    match color {
        MarkerColor::Blue => Color32::from_rgb(60, 110, 255),
        MarkerColor::Red => Color32::from_rgb(235, 60, 50),
    }
}

pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
