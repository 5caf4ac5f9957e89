//! Header bar with plot facts, playback control and status

use eframe::egui;

use super::ViewerApp;
use crate::feed_state::FeedState;
use crate::theme::colors;
use crate::time::now_seconds;

impl ViewerApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        let dims = self.setup.dims();
        let box_length = self.setup.box_length();
        let marker_size = self.setup.particles.marker_size();
        let particle_count = self.setup.particles.len();
        let feed_state = self.source.state();

        ui.horizontal(|ui| {
            let play_text = if self.animation.is_paused() { "Play" } else { "Pause" };
            if ui.button(egui::RichText::new(play_text)).clicked() {
                self.animation.toggle();
            }

            ui.add_space(10.0);

            ui.label(egui::RichText::new(format!("{dims}")).color(colors::TEXT_PRIMARY));
            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
            ui.label(
                egui::RichText::new(format!("box {box_length}"))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
            ui.label(
                egui::RichText::new(format!("ms {marker_size}"))
                    .color(colors::TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.rejected_frames > 0 {
                    ui.label(
                        egui::RichText::new(format!("{} rejected", self.rejected_frames))
                            .color(colors::STATUS_BAD),
                    );
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                }

                if let Some(step) = self.last_step {
                    ui.label(
                        egui::RichText::new(format!("step {step}")).color(colors::TEXT_MUTED),
                    );
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                }

                ui.label(
                    egui::RichText::new(format!("{particle_count} particles"))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );

                ui.add_space(10.0);

                let status_color = match &feed_state {
                    FeedState::Offline | FeedState::Connected => colors::STATUS_OK,
                    FeedState::Connecting => colors::STATUS_WAIT,
                    FeedState::Disconnected | FeedState::Error(_) => colors::STATUS_BAD,
                };
                let status = if self.finished {
                    "Finished".to_string()
                } else {
                    format!("{} ({})", feed_state.label(), self.source.name())
                };
                ui.colored_label(status_color, egui::RichText::new(status))
                    .on_hover_text(feed_state.to_string());
            });
        });
    }
}

/// FPS counter over the last 60 repaints
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        self.record(now_seconds());
    }

    fn record(&mut self, now: f64) {
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        for i in 0..31 {
            fps.record(i as f64 / 30.0);
        }
        assert!((fps.fps() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_fps_counter_keeps_sixty_samples() {
        let mut fps = FpsCounter::new();
        for i in 0..100 {
            fps.record(i as f64);
        }
        assert_eq!(fps.frames.len(), 60);
        assert!((fps.fps() - 1.0).abs() < 1e-9);
    }
}
