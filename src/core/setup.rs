//! Figure, axis and particle artist setup for a particle animation

use tracing::debug;

use super::{Axes, Dimensionality, Figure, Limits, ParticleArtist, SetupError};

/// Everything an animation driver needs: the canvas, the axis and the
/// artist whose positions are replaced every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSetup {
    pub figure: Figure,
    pub axes: Axes,
    pub particles: ParticleArtist,
}

impl PlotSetup {
    pub fn dims(&self) -> Dimensionality {
        self.axes.dims()
    }

    /// Box side the axis limits were derived from
    pub fn box_length(&self) -> f64 {
        self.axes.xlim().span()
    }

    pub fn into_parts(self) -> (Figure, Axes, ParticleArtist) {
        (self.figure, self.axes, self.particles)
    }
}

/// Build a figure whose axis spans `±box_length / 2` on every coordinate and
/// an empty particle artist with circle markers of `marker_size` points.
pub fn setup_plot(
    dims: Dimensionality,
    box_length: f64,
    marker_size: f64,
) -> Result<PlotSetup, SetupError> {
    if !box_length.is_finite() || box_length <= 0.0 {
        return Err(SetupError::InvalidBoxLength(box_length));
    }
    if !marker_size.is_finite() || marker_size < 0.0 {
        return Err(SetupError::InvalidMarkerSize(marker_size));
    }

    let figure = Figure::default();
    let axes = dims.init_axes(Limits::symmetric(box_length));
    let particles = dims.point_artist(marker_size);

    debug!(%dims, box_length, marker_size, "Plot set up");

    Ok(PlotSetup {
        figure,
        axes,
        particles,
    })
}

/// Same as [`setup_plot`], taking the dimensionality as a raw integer.
///
/// Anything other than 2 or 3 is rejected.
pub fn setup_plot_with(
    num_dims: u32,
    box_length: f64,
    marker_size: f64,
) -> Result<PlotSetup, SetupError> {
    let dims = Dimensionality::try_from(num_dims)?;
    setup_plot(dims, box_length, marker_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_limits_match_box() {
        let setup = setup_plot_with(2, 10.0, 6.0).unwrap();
        assert_eq!(setup.dims(), Dimensionality::Planar);
        assert_eq!(setup.axes.xlim().as_tuple(), (-5.0, 5.0));
        assert_eq!(setup.axes.ylim().as_tuple(), (-5.0, 5.0));
        assert_eq!(setup.axes.zlim(), None);
        match &setup.axes {
            Axes::Planar(ax) => assert!(!ax.autoscale),
            Axes::Spatial(_) => panic!("expected planar axes"),
        }
    }

    #[test]
    fn test_spatial_limits_match_box() {
        let setup = setup_plot_with(3, 7.0, 2.0).unwrap();
        assert_eq!(setup.dims(), Dimensionality::Spatial);
        for lim in setup.axes.limits() {
            assert_eq!(lim.as_tuple(), (-3.5, 3.5));
        }
        assert_eq!(setup.axes.zlim().map(|l| l.as_tuple()), Some((-3.5, 3.5)));
    }

    #[test]
    fn test_marker_size_is_kept() {
        for dims in Dimensionality::ALL {
            let setup = setup_plot(*dims, 1.0, 3.25).unwrap();
            assert_eq!(setup.particles.marker_size(), 3.25);
            assert_eq!(setup.particles.dims(), *dims);
            assert!(setup.particles.is_empty());
        }
    }

    #[test]
    fn test_invalid_dims_rejected() {
        assert_eq!(
            setup_plot_with(4, 10.0, 6.0),
            Err(SetupError::UnsupportedDimensions(4))
        );
        assert_eq!(
            setup_plot_with(1, 10.0, 6.0),
            Err(SetupError::UnsupportedDimensions(1))
        );
    }

    #[test]
    fn test_invalid_box_and_marker_rejected() {
        assert_eq!(
            setup_plot(Dimensionality::Planar, 0.0, 1.0),
            Err(SetupError::InvalidBoxLength(0.0))
        );
        assert_eq!(
            setup_plot(Dimensionality::Planar, -2.0, 1.0),
            Err(SetupError::InvalidBoxLength(-2.0))
        );
        assert!(matches!(
            setup_plot(Dimensionality::Spatial, f64::INFINITY, 1.0),
            Err(SetupError::InvalidBoxLength(_))
        ));
        assert_eq!(
            setup_plot(Dimensionality::Spatial, 1.0, -1.0),
            Err(SetupError::InvalidMarkerSize(-1.0))
        );
    }

    #[test]
    fn test_into_parts() {
        let setup = setup_plot(Dimensionality::Spatial, 4.0, 1.0).unwrap();
        assert_eq!(setup.box_length(), 4.0);
        let (figure, axes, particles) = setup.into_parts();
        assert_eq!(figure.width_in, 8.0);
        assert_eq!(axes.dims(), particles.dims());
    }
}
