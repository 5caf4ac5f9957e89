//! Drawable point collection representing the simulated particles

use serde::{Deserialize, Serialize};

use super::{Dimensionality, Frame, FrameError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerColor {
    Blue,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub shape: MarkerShape,
    pub color: MarkerColor,
    /// Marker diameter in points
    pub size: f64,
}

/// Point collection updated once per animation frame.
///
/// Planar artists store `z = 0` for every particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleArtist {
    dims: Dimensionality,
    marker: Marker,
    positions: Vec<[f64; 3]>,
}

impl ParticleArtist {
    pub fn new(dims: Dimensionality, marker: Marker) -> Self {
        Self {
            dims,
            marker,
            positions: Vec::new(),
        }
    }

    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn marker_size(&self) -> f64 {
        self.marker.size
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Replace positions of a planar artist
    pub fn set_xy(&mut self, xy: &[[f64; 2]]) -> Result<(), FrameError> {
        self.expect_dims(Dimensionality::Planar)?;
        check_finite(xy.iter().map(|p| p.as_slice()))?;
        self.positions.clear();
        self.positions.extend(xy.iter().map(|&[x, y]| [x, y, 0.0]));
        Ok(())
    }

    /// Replace positions of a spatial artist
    pub fn set_xyz(&mut self, xyz: &[[f64; 3]]) -> Result<(), FrameError> {
        self.expect_dims(Dimensionality::Spatial)?;
        check_finite(xyz.iter().map(|p| p.as_slice()))?;
        self.positions.clear();
        self.positions.extend_from_slice(xyz);
        Ok(())
    }

    /// Replace positions from a decoded frame.
    ///
    /// Every row must have exactly as many coordinates as the artist has
    /// dimensions; on error the previous positions are kept.
    pub fn set_frame(&mut self, frame: &Frame) -> Result<(), FrameError> {
        let expected = self.dims.count();
        for (index, row) in frame.positions.iter().enumerate() {
            if row.len() != expected {
                return Err(FrameError::CoordinateCount {
                    index,
                    found: row.len(),
                    expected,
                });
            }
        }
        check_finite(frame.positions.iter().map(|row| row.as_slice()))?;

        self.positions.clear();
        self.positions.extend(frame.positions.iter().map(|row| {
            let mut p = [0.0; 3];
            p[..row.len()].copy_from_slice(row);
            p
        }));
        Ok(())
    }

    fn expect_dims(&self, found: Dimensionality) -> Result<(), FrameError> {
        if self.dims != found {
            return Err(FrameError::DimensionMismatch {
                expected: self.dims.count(),
                found: found.count(),
            });
        }
        Ok(())
    }
}

fn check_finite<'a>(rows: impl Iterator<Item = &'a [f64]>) -> Result<(), FrameError> {
    for (index, row) in rows.enumerate() {
        if row.iter().any(|v| !v.is_finite()) {
            return Err(FrameError::NonFinite { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planar() -> ParticleArtist {
        Dimensionality::Planar.point_artist(4.0)
    }

    fn spatial() -> ParticleArtist {
        Dimensionality::Spatial.point_artist(4.0)
    }

    #[test]
    fn test_new_artist_is_empty() {
        let artist = planar();
        assert!(artist.is_empty());
        assert_eq!(artist.marker().shape, MarkerShape::Circle);
    }

    #[test]
    fn test_set_xy_pads_z() {
        let mut artist = planar();
        artist.set_xy(&[[1.0, 2.0], [-1.0, 0.5]]).unwrap();
        assert_eq!(artist.positions(), &[[1.0, 2.0, 0.0], [-1.0, 0.5, 0.0]]);
    }

    #[test]
    fn test_set_xyz_on_planar_is_rejected() {
        let mut artist = planar();
        let err = artist.set_xyz(&[[0.0, 0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::DimensionMismatch { expected: 2, found: 3 }
        ));
    }

    #[test]
    fn test_set_frame_wrong_row_keeps_previous() {
        let mut artist = spatial();
        artist.set_xyz(&[[1.0, 1.0, 1.0]]).unwrap();

        let frame = Frame::new(3, vec![vec![0.0, 0.0, 0.0], vec![1.0, 2.0]]);
        let err = artist.set_frame(&frame).unwrap_err();
        assert!(matches!(
            err,
            FrameError::CoordinateCount { index: 1, found: 2, expected: 3 }
        ));
        assert_eq!(artist.positions(), &[[1.0, 1.0, 1.0]]);
    }

    #[test]
    fn test_set_frame_rejects_nan() {
        let mut artist = planar();
        let frame = Frame::new(0, vec![vec![0.0, f64::NAN]]);
        assert!(matches!(
            artist.set_frame(&frame),
            Err(FrameError::NonFinite { index: 0 })
        ));
        assert!(artist.is_empty());
    }

    #[test]
    fn test_set_frame_then_clear() {
        let mut artist = planar();
        let frame = Frame::new(1, vec![vec![0.25, -0.25]; 5]);
        artist.set_frame(&frame).unwrap();
        assert_eq!(artist.len(), 5);
        artist.clear();
        assert!(artist.is_empty());
    }
}
