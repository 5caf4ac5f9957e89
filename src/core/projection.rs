//! Orthographic camera for drawing the spatial axis on a flat plot
//!
//! Elevation and azimuth follow the usual 3D-axes convention: azimuth 0
//! looks from +x towards the origin, elevation 90 looks straight down.

use serde::{Deserialize, Serialize};

use super::Limits;

pub const DEFAULT_ELEVATION_DEG: f64 = 30.0;
pub const DEFAULT_AZIMUTH_DEG: f64 = -60.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation_deg: DEFAULT_ELEVATION_DEG,
            azimuth_deg: DEFAULT_AZIMUTH_DEG,
        }
    }
}

impl Camera {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
        }
    }

    /// Rotate by a drag delta (degrees); elevation is clamped to [-90, 90]
    pub fn orbit(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth_deg = (self.azimuth_deg + d_azimuth + 180.0).rem_euclid(360.0) - 180.0;
        self.elevation_deg = (self.elevation_deg + d_elevation).clamp(-90.0, 90.0);
    }

    fn angles(&self) -> (f64, f64, f64, f64) {
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        (sa, ca, se, ce)
    }

    /// Screen coordinates of a point in data space
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (sa, ca, se, ce) = self.angles();
        let [x, y, z] = p;
        [
            -x * sa + y * ca,
            -x * ca * se - y * sa * se + z * ce,
        ]
    }

    /// Distance towards the viewer; larger values are drawn later
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (sa, ca, se, ce) = self.angles();
        let [x, y, z] = p;
        x * ca * ce + y * sa * ce + z * se
    }
}

/// Corners of the box spanned by three limits
pub fn box_corners(limits: [Limits; 3]) -> [[f64; 3]; 8] {
    let [lx, ly, lz] = limits;
    let mut corners = [[0.0; 3]; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = [
            if i & 1 == 0 { lx.min } else { lx.max },
            if i & 2 == 0 { ly.min } else { ly.max },
            if i & 4 == 0 { lz.min } else { lz.max },
        ];
    }
    corners
}

/// The 12 edges of the bounding box as corner pairs
pub fn box_edges(limits: [Limits; 3]) -> Vec<([f64; 3], [f64; 3])> {
    let corners = box_corners(limits);
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                edges.push((corners[i], corners[i | bit]));
            }
        }
    }
    edges
}

/// Radius that bounds every projected corner, whatever the camera angle
pub fn projected_extent(limits: [Limits; 3]) -> f64 {
    limits
        .iter()
        .map(|l| l.min.abs().max(l.max.abs()).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn test_origin_projects_to_origin() {
        let camera = Camera::default();
        assert!(close(camera.project([0.0, 0.0, 0.0]), [0.0, 0.0]));
    }

    #[test]
    fn test_top_view_keeps_xy() {
        let camera = Camera::new(90.0, -90.0);
        assert!(close(camera.project([1.5, -2.0, 7.0]), [1.5, -2.0]));
    }

    #[test]
    fn test_side_view_from_x() {
        let camera = Camera::new(0.0, 0.0);
        assert!(close(camera.project([3.0, 1.0, 2.0]), [1.0, 2.0]));
        assert!(camera.depth([1.0, 0.0, 0.0]) > camera.depth([-1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_box_has_twelve_unit_edges() {
        let limits = [Limits::symmetric(2.0); 3];
        let edges = box_edges(limits);
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            let len: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
            assert!((len.sqrt() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_projected_corners_within_extent() {
        let limits = [Limits::symmetric(10.0); 3];
        let extent = projected_extent(limits);
        for camera in [Camera::default(), Camera::new(12.0, 170.0), Camera::new(-45.0, 33.0)] {
            for corner in box_corners(limits) {
                let [x, y] = camera.project(corner);
                assert!((x * x + y * y).sqrt() <= extent + 1e-9);
            }
        }
    }

    #[test]
    fn test_orbit_wraps_and_clamps() {
        let mut camera = Camera::new(80.0, 170.0);
        camera.orbit(20.0, 30.0);
        assert_eq!(camera.elevation_deg, 90.0);
        assert!((camera.azimuth_deg - (-170.0)).abs() < 1e-9);
    }
}
