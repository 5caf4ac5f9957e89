//! Particle viewer app
//!
//! Owns the plot setup and a frame source, and replaces the particle
//! positions whenever the animation clock says a frame is due.

mod header;

use std::time::Duration;

use eframe::egui;
use tracing::{debug, info, warn};

use crate::core::{Animation, FrameSource, PlotSetup, ViewerConfig};
use crate::theme::{colors, minimal_visuals};
use crate::time::now_seconds;
use crate::view::show_plot;

pub use header::FpsCounter;

pub struct ViewerApp {
    pub(crate) setup: PlotSetup,
    source: Box<dyn FrameSource>,
    pub(crate) animation: Animation,
    pub(crate) fps_counter: FpsCounter,
    /// Step of the frame currently on screen
    pub(crate) last_step: Option<u64>,
    /// Frames accepted by the artist
    pub(crate) frames_applied: u64,
    /// Frames rejected by the artist (wrong shape, NaN)
    pub(crate) rejected_frames: u64,
    /// A finite source ran dry
    pub(crate) finished: bool,
}

impl ViewerApp {
    pub fn new(setup: PlotSetup, source: Box<dyn FrameSource>, config: &ViewerConfig) -> Self {
        info!(
            dims = %setup.dims(),
            source = source.name(),
            interval_ms = config.interval_ms,
            "Viewer created"
        );
        Self {
            setup,
            source,
            animation: Animation::new(config.interval_ms),
            fps_counter: FpsCounter::new(),
            last_step: None,
            frames_applied: 0,
            rejected_frames: 0,
            finished: false,
        }
    }

    /// Apply the creation context (visuals) and return the app
    pub fn install(self, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());
        self
    }

    pub fn setup(&self) -> &PlotSetup {
        &self.setup
    }

    /// Advance the clock; pull and apply a frame when one is due.
    /// Returns true when the artist changed.
    pub fn step(&mut self, now: f64) -> bool {
        if self.finished || !self.animation.tick(now) {
            return false;
        }

        let Some(frame) = self.source.next_frame() else {
            if self.source.is_finite() {
                info!(
                    frames = self.frames_applied,
                    rejected = self.rejected_frames,
                    ticks = self.animation.ticks(),
                    "Frame source exhausted"
                );
                self.finished = true;
            }
            return false;
        };

        match self.setup.particles.set_frame(&frame) {
            Ok(()) => {
                debug!(step = frame.step, particles = frame.len(), "Frame applied");
                self.last_step = Some(frame.step);
                self.frames_applied += 1;
                true
            }
            Err(e) => {
                self.rejected_frames += 1;
                warn!(step = frame.step, error = %e, "Frame rejected");
                false
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = now_seconds();
        self.step(now);

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.animation.toggle();
        }

        match self.animation.until_next(now) {
            Some(wait) if !self.finished => {
                ctx.request_repaint_after(Duration::from_secs_f64(wait));
            }
            _ => {}
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                show_plot(ui, &mut self.setup);
            });
    }
}
