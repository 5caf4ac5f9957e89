//! Planar and spatial coordinate frames owning the plot limits

use serde::{Deserialize, Serialize};

use super::{Camera, Dimensionality, Limits};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aspect {
    /// One data unit has the same length on both axes
    #[default]
    Equal,
    Auto,
}

/// 2D axis with fixed limits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanarAxes {
    pub xlim: Limits,
    pub ylim: Limits,
    pub aspect: Aspect,
    /// When false the limits never follow the data
    pub autoscale: bool,
}

/// 3D axis with fixed limits and a view camera
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialAxes {
    pub xlim: Limits,
    pub ylim: Limits,
    pub zlim: Limits,
    pub camera: Camera,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Axes {
    Planar(PlanarAxes),
    Spatial(SpatialAxes),
}

impl Axes {
    pub fn dims(&self) -> Dimensionality {
        match self {
            Axes::Planar(_) => Dimensionality::Planar,
            Axes::Spatial(_) => Dimensionality::Spatial,
        }
    }

    pub fn xlim(&self) -> Limits {
        match self {
            Axes::Planar(ax) => ax.xlim,
            Axes::Spatial(ax) => ax.xlim,
        }
    }

    pub fn ylim(&self) -> Limits {
        match self {
            Axes::Planar(ax) => ax.ylim,
            Axes::Spatial(ax) => ax.ylim,
        }
    }

    /// None for planar axes
    pub fn zlim(&self) -> Option<Limits> {
        match self {
            Axes::Planar(_) => None,
            Axes::Spatial(ax) => Some(ax.zlim),
        }
    }

    /// One entry per coordinate
    pub fn limits(&self) -> Vec<Limits> {
        match self {
            Axes::Planar(ax) => vec![ax.xlim, ax.ylim],
            Axes::Spatial(ax) => vec![ax.xlim, ax.ylim, ax.zlim],
        }
    }

    /// Whether a position lies inside the limits (z ignored for planar axes)
    pub fn contains(&self, p: [f64; 3]) -> bool {
        self.limits()
            .iter()
            .zip(p.iter())
            .all(|(lim, &v)| lim.contains(v))
    }

    pub fn camera(&self) -> Option<&Camera> {
        match self {
            Axes::Planar(_) => None,
            Axes::Spatial(ax) => Some(&ax.camera),
        }
    }
}
