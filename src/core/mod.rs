//! Platform-agnostic core module - shared between the viewer and headless use

pub mod animation;
pub mod artist;
pub mod axes;
pub mod config;
pub mod dims;
pub mod error;
pub mod figure;
pub mod frame;
pub mod limits;
pub mod projection;
pub mod setup;
pub mod source;

pub use animation::{Animation, DEFAULT_INTERVAL_MS};
pub use artist::{Marker, MarkerColor, MarkerShape, ParticleArtist};
pub use axes::{Aspect, Axes, PlanarAxes, SpatialAxes};
pub use config::ViewerConfig;
pub use dims::Dimensionality;
pub use error::{ConfigError, FrameError, SetupError};
pub use figure::Figure;
pub use frame::{parse_frame, parse_trajectory, Frame};
pub use limits::Limits;
pub use projection::{box_edges, projected_extent, Camera};
pub use setup::{setup_plot, setup_plot_with, PlotSetup};
pub use source::{wrap_into_box, FrameSource, RandomWalk, Trajectory};
