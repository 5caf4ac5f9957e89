//! Frame sources feeding the animation: a periodic random walk and recorded
//! trajectories

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{parse_trajectory, Dimensionality, Frame, FrameError};
use crate::feed_state::FeedState;

/// Anything that can hand out the next snapshot of the particles
pub trait FrameSource {
    /// `None` when the source is exhausted (or has nothing new yet)
    fn next_frame(&mut self) -> Option<Frame>;

    /// Short name for the header bar
    fn name(&self) -> &'static str;

    /// Live sources report their connection; local ones are always offline
    fn state(&self) -> FeedState {
        FeedState::Offline
    }

    /// Whether `None` from [`next_frame`](Self::next_frame) means no more frames ever
    fn is_finite(&self) -> bool {
        true
    }
}

/// Map a coordinate into the periodic box `[-L/2, L/2)`
pub fn wrap_into_box(value: f64, box_length: f64) -> f64 {
    let half = 0.5 * box_length;
    let mut shifted = (value + half).rem_euclid(box_length);
    // rem_euclid can round up to exactly box_length
    if shifted >= box_length {
        shifted = 0.0;
    }
    shifted - half
}

/// Non-interacting particles taking uniform random steps inside a periodic
/// box. Used when no recorded or live frames are available.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    dims: Dimensionality,
    box_length: f64,
    step_size: f64,
    positions: Vec<Vec<f64>>,
    step: u64,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(dims: Dimensionality, num_particles: usize, box_length: f64, step_size: f64) -> Self {
        Self::with_rng(dims, num_particles, box_length, step_size, StdRng::from_entropy())
    }

    pub fn seeded(
        dims: Dimensionality,
        num_particles: usize,
        box_length: f64,
        step_size: f64,
        seed: u64,
    ) -> Self {
        Self::with_rng(dims, num_particles, box_length, step_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        dims: Dimensionality,
        num_particles: usize,
        box_length: f64,
        step_size: f64,
        mut rng: StdRng,
    ) -> Self {
        let half = 0.5 * box_length;
        let positions = (0..num_particles)
            .map(|_| (0..dims.count()).map(|_| rng.gen_range(-1.0..1.0) * half).collect())
            .collect();

        debug!(%dims, num_particles, box_length, step_size, "Random walk initialised");

        Self {
            dims,
            box_length,
            step_size,
            positions,
            step: 0,
            rng,
        }
    }

    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move every particle once and wrap it back into the box
    pub fn advance(&mut self) {
        for p in &mut self.positions {
            for v in p.iter_mut() {
                let moved = *v + self.rng.gen_range(-1.0..1.0) * self.step_size;
                *v = wrap_into_box(moved, self.box_length);
            }
        }
        self.step += 1;
    }

    pub fn snapshot(&self) -> Frame {
        Frame::new(self.step, self.positions.clone())
    }
}

impl FrameSource for RandomWalk {
    fn next_frame(&mut self) -> Option<Frame> {
        let frame = self.snapshot();
        self.advance();
        Some(frame)
    }

    fn name(&self) -> &'static str {
        "random walk"
    }
}

/// Recorded frames played back in order, optionally from the start again
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    frames: Vec<Frame>,
    cursor: usize,
    repeat: bool,
}

impl Trajectory {
    pub fn new(frames: Vec<Frame>, repeat: bool) -> Self {
        Self {
            frames,
            cursor: 0,
            repeat,
        }
    }

    /// Load a JSON-lines file
    pub fn load(path: impl AsRef<Path>, repeat: bool) -> Result<Self, FrameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let frames = parse_trajectory(&text)?;
        info!(path = %path.display(), frames = frames.len(), "Trajectory loaded");
        Ok(Self::new(frames, repeat))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Coordinates per particle of the first frame, if any
    pub fn dims(&self) -> Option<Dimensionality> {
        let first = self.frames.first()?.positions.first()?;
        Dimensionality::try_from(first.len() as u32).ok()
    }

}

impl FrameSource for Trajectory {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.cursor >= self.frames.len() {
            if !self.repeat || self.frames.is_empty() {
                return None;
            }
            self.cursor = 0;
        }
        let frame = self.frames[self.cursor].clone();
        self.cursor += 1;
        Some(frame)
    }

    fn name(&self) -> &'static str {
        "trajectory"
    }
}
