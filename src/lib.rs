//! Particle plot - figure/axis setup for animating simulation particles
//!
//! Builds a figure, a 2D or 3D axis bounded by the simulation box, and an
//! empty particle artist that an animation driver refills frame by frame.
//! - `core`: platform-agnostic setup, frames, sources, animation clock
//! - `view` / `app` (feature `gui`): egui_plot rendering and the viewer app
//! - `feed` (feature `cli`): live frames over WebSocket

pub mod core;
pub mod feed_state;
pub mod time;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod theme;
#[cfg(feature = "gui")]
pub mod view;

#[cfg(feature = "cli")]
pub mod feed;

pub use crate::core::{setup_plot, setup_plot_with, Dimensionality, PlotSetup, SetupError};
