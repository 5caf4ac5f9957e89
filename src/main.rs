//! Particle viewer
//!
//! Run with: cargo run --features cli --bin particle-view -- --dims 3
//!
//! Flags override `PARTICLE_PLOT_*` environment variables, which override
//! the `--config` file (or the built-in defaults). Frames come from `--feed`
//! (WebSocket), then `--trajectory` (JSON lines), then a random walk.

use std::path::PathBuf;

use particle_plot::app::ViewerApp;
use particle_plot::core::config::parse_value;
use particle_plot::core::{FrameSource, RandomWalk, Trajectory, ViewerConfig};
use particle_plot::feed::FeedClient;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "\
particle-view [OPTIONS]

  --dims <2|3>          plot dimensionality
  --box-length <L>      simulation box side
  --marker-size <MS>    marker diameter in points
  --particles <N>       random-walk particle count
  --step-size <S>       random-walk step
  --interval-ms <MS>    delay between frames
  --seed <SEED>         random-walk seed
  --trajectory <PATH>   JSON-lines frames to play
  --feed <URL>          WebSocket frame feed
  --no-repeat           stop at the end of a trajectory
  --config <PATH>       JSON config used instead of the defaults
";

fn parse_args() -> Result<ViewerConfig, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let file_text = match args.opt_value_from_str::<_, PathBuf>("--config")? {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            info!(path = %path.display(), "Config file loaded");
            Some(text)
        }
        None => None,
    };
    let mut config = ViewerConfig::load(file_text.as_deref(), |key| std::env::var(key).ok())?;

    if let Some(dims) = args.opt_value_from_str::<_, String>("--dims")? {
        let n: u32 = parse_value("--dims", &dims)?;
        config.dims = n.try_into()?;
    }
    if let Some(v) = args.opt_value_from_str("--box-length")? {
        config.box_length = v;
    }
    if let Some(v) = args.opt_value_from_str("--marker-size")? {
        config.marker_size = v;
    }
    if let Some(v) = args.opt_value_from_str("--particles")? {
        config.particles = v;
    }
    if let Some(v) = args.opt_value_from_str("--step-size")? {
        config.step_size = v;
    }
    if let Some(v) = args.opt_value_from_str("--interval-ms")? {
        config.interval_ms = v;
    }
    if let Some(v) = args.opt_value_from_str("--seed")? {
        config.seed = Some(v);
    }
    if let Some(v) = args.opt_value_from_str("--trajectory")? {
        config.trajectory = Some(v);
    }
    if let Some(v) = args.opt_value_from_str("--feed")? {
        config.feed_url = Some(v);
    }
    if args.contains("--no-repeat") {
        config.repeat = false;
    }

    let rest = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "Ignoring unknown arguments");
    }

    config.validate()?;
    Ok(config)
}

fn frame_source(config: &ViewerConfig) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
    if let Some(url) = &config.feed_url {
        info!(url = %url, "Using live frame feed");
        return Ok(Box::new(FeedClient::connect(url)));
    }

    if let Some(path) = &config.trajectory {
        let trajectory = Trajectory::load(path, config.repeat)?;
        if let Some(dims) = trajectory.dims() {
            if dims != config.dims {
                warn!(file = %dims, plot = %config.dims, "Trajectory does not match plot dimensionality");
            }
        }
        return Ok(Box::new(trajectory));
    }

    let walk = match config.seed {
        Some(seed) => RandomWalk::seeded(
            config.dims,
            config.particles,
            config.box_length,
            config.step_size,
            seed,
        ),
        None => RandomWalk::new(config.dims, config.particles, config.box_length, config.step_size),
    };
    Ok(Box::new(walk))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,particle_plot=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = parse_args()?;
    let setup = config.setup()?;
    let source = frame_source(&config)?;

    let [width, height] = setup.figure.pixel_size();
    let title = format!("particle-view ({})", setup.dims());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height + 40.0])
            .with_title(&title),
        ..Default::default()
    };

    let app = ViewerApp::new(setup, source, &config);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(app.install(cc)))),
    )?;

    info!("Viewer closed");
    Ok(())
}
