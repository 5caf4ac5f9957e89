//! Closed set of supported plot dimensionalities
//!
//! Each variant knows how to build its axis and its particle artist, so the
//! planar/spatial choice is made once, at setup time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    Aspect, Axes, Camera, Limits, Marker, MarkerColor, MarkerShape, ParticleArtist, PlanarAxes,
    SetupError, SpatialAxes,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Dimensionality {
    #[default]
    Planar,
    Spatial,
}

impl Dimensionality {
    pub const ALL: &'static [Dimensionality] = &[Dimensionality::Planar, Dimensionality::Spatial];

    /// Number of coordinates per particle
    pub fn count(&self) -> usize {
        match self {
            Dimensionality::Planar => 2,
            Dimensionality::Spatial => 3,
        }
    }

    /// Axis with the same limits on every coordinate
    pub fn init_axes(&self, limits: Limits) -> Axes {
        match self {
            Dimensionality::Planar => Axes::Planar(PlanarAxes {
                xlim: limits,
                ylim: limits,
                aspect: Aspect::Equal,
                autoscale: false,
            }),
            Dimensionality::Spatial => Axes::Spatial(SpatialAxes {
                xlim: limits,
                ylim: limits,
                zlim: limits,
                camera: Camera::default(),
            }),
        }
    }

    /// Empty circle-marker artist: blue in 2D, red in 3D
    pub fn point_artist(&self, marker_size: f64) -> ParticleArtist {
        let color = match self {
            Dimensionality::Planar => MarkerColor::Blue,
            Dimensionality::Spatial => MarkerColor::Red,
        };
        ParticleArtist::new(
            *self,
            Marker {
                shape: MarkerShape::Circle,
                color,
                size: marker_size,
            },
        )
    }
}

impl TryFrom<u32> for Dimensionality {
    type Error = SetupError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimensionality::Planar),
            3 => Ok(Dimensionality::Spatial),
            other => Err(SetupError::UnsupportedDimensions(other)),
        }
    }
}

impl From<Dimensionality> for u32 {
    fn from(dims: Dimensionality) -> u32 {
        dims.count() as u32
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_accepts_two_and_three() {
        assert_eq!(Dimensionality::try_from(2), Ok(Dimensionality::Planar));
        assert_eq!(Dimensionality::try_from(3), Ok(Dimensionality::Spatial));
    }

    #[test]
    fn test_try_from_rejects_others() {
        for bad in [0, 1, 4, 42] {
            assert_eq!(
                Dimensionality::try_from(bad),
                Err(SetupError::UnsupportedDimensions(bad))
            );
        }
    }

    #[test]
    fn test_serde_uses_integer_form() {
        let dims: Dimensionality = serde_json::from_str("3").unwrap();
        assert_eq!(dims, Dimensionality::Spatial);
        assert_eq!(serde_json::to_string(&Dimensionality::Planar).unwrap(), "2");
        assert!(serde_json::from_str::<Dimensionality>("5").is_err());
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(Dimensionality::Planar.point_artist(1.0).marker().color, MarkerColor::Blue);
        assert_eq!(Dimensionality::Spatial.point_artist(1.0).marker().color, MarkerColor::Red);
        assert_eq!(Dimensionality::Spatial.to_string(), "3D");
    }
}
