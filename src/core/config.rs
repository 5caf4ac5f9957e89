//! Viewer configuration: defaults (or a JSON config file in their place),
//! overridden by environment variables, then by command-line flags (applied
//! in the binary)

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

use super::{setup_plot, ConfigError, Dimensionality, PlotSetup, DEFAULT_INTERVAL_MS};

pub const ENV_DIMS: &str = "PARTICLE_PLOT_DIMS";
pub const ENV_BOX: &str = "PARTICLE_PLOT_BOX";
pub const ENV_MARKER: &str = "PARTICLE_PLOT_MARKER";
pub const ENV_FEED: &str = "PARTICLE_PLOT_FEED";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub dims: Dimensionality,
    pub box_length: f64,
    pub marker_size: f64,
    /// Particles in the built-in random walk
    pub particles: usize,
    /// Random walk step, in box units
    pub step_size: f64,
    pub interval_ms: u64,
    pub repeat: bool,
    pub seed: Option<u64>,
    /// JSON-lines trajectory to play instead of the random walk
    pub trajectory: Option<PathBuf>,
    /// WebSocket URL streaming frames
    pub feed_url: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dims: Dimensionality::Planar,
            box_length: 10.0,
            marker_size: 6.0,
            particles: 100,
            step_size: 0.1,
            interval_ms: DEFAULT_INTERVAL_MS,
            repeat: true,
            seed: None,
            trajectory: None,
            feed_url: None,
        }
    }
}

impl ViewerConfig {
    /// Build the base layer from `file_text` (JSON) or the defaults, then
    /// apply overrides from `get` (`PARTICLE_PLOT_*` variables). Not
    /// validated yet: flags go on top, then [`validate`](Self::validate).
    pub fn load(
        file_text: Option<&str>,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file_text {
            Some(text) => serde_json::from_str(text)?,
            None => Self::default(),
        };
        config.apply_env(get)?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = get(ENV_DIMS) {
            let n: u32 = parse_value(ENV_DIMS, &value)?;
            self.dims = Dimensionality::try_from(n)?;
        }
        if let Some(value) = get(ENV_BOX) {
            self.box_length = parse_value(ENV_BOX, &value)?;
        }
        if let Some(value) = get(ENV_MARKER) {
            self.marker_size = parse_value(ENV_MARKER, &value)?;
        }
        if let Some(value) = get(ENV_FEED) {
            if !value.trim().is_empty() {
                self.feed_url = Some(value);
            }
        }
        Ok(())
    }

    /// Reject values the plot setup would refuse
    pub fn validate(&self) -> Result<(), ConfigError> {
        setup_plot(self.dims, self.box_length, self.marker_size)?;
        if !self.step_size.is_finite() || self.step_size < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "step_size",
                value: self.step_size.to_string(),
            });
        }
        Ok(())
    }

    pub fn setup(&self) -> Result<PlotSetup, ConfigError> {
        let setup = setup_plot(self.dims, self.box_length, self.marker_size)?;
        info!(
            dims = %self.dims,
            box_length = self.box_length,
            marker_size = self.marker_size,
            "Viewer configured"
        );
        Ok(setup)
    }
}

pub fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        config.validate().unwrap();
        let setup = config.setup().unwrap();
        assert_eq!(setup.axes.xlim().as_tuple(), (-5.0, 5.0));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ViewerConfig::default();
        config
            .apply_env(lookup(&[
                (ENV_DIMS, "3"),
                (ENV_BOX, "4.5"),
                (ENV_MARKER, " 2 "),
                (ENV_FEED, "ws://127.0.0.1:9000/frames"),
            ]))
            .unwrap();
        assert_eq!(config.dims, Dimensionality::Spatial);
        assert_eq!(config.box_length, 4.5);
        assert_eq!(config.marker_size, 2.0);
        assert_eq!(config.feed_url.as_deref(), Some("ws://127.0.0.1:9000/frames"));
    }

    #[test]
    fn test_env_bad_dims() {
        let mut config = ViewerConfig::default();
        let err = config.apply_env(lookup(&[(ENV_DIMS, "4")])).unwrap_err();
        assert!(matches!(err, ConfigError::Setup(_)));

        let err = config.apply_env(lookup(&[(ENV_BOX, "wide")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_BOX, .. }));
    }

    #[test]
    fn test_config_file_replaces_defaults() {
        let file = r#"{"dims":3,"box_length":2.0,"particles":8}"#;
        let config = ViewerConfig::load(Some(file), lookup(&[])).unwrap();
        assert_eq!(config.dims, Dimensionality::Spatial);
        assert_eq!(config.particles, 8);
        assert_eq!(config.marker_size, 6.0);
        config.validate().unwrap();

        assert!(ViewerConfig::load(Some(r#"{"dims":1}"#), lookup(&[])).is_err());
        assert!(matches!(
            ViewerConfig::load(Some("{not json"), lookup(&[])),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let file = r#"{"dims":2,"box_length":3.0,"particles":12}"#;
        let config = ViewerConfig::load(
            Some(file),
            lookup(&[(ENV_DIMS, "3"), (ENV_FEED, "ws://localhost:9000")]),
        )
        .unwrap();
        assert_eq!(config.dims, Dimensionality::Spatial);
        assert_eq!(config.feed_url.as_deref(), Some("ws://localhost:9000"));
        // untouched file values survive
        assert_eq!(config.box_length, 3.0);
        assert_eq!(config.particles, 12);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ViewerConfig::load(None, lookup(&[(ENV_BOX, "8")])).unwrap();
        assert_eq!(config.box_length, 8.0);
        assert_eq!(config.particles, ViewerConfig::default().particles);
    }

    #[test]
    fn test_invalid_file_value_can_be_overridden() {
        let file = r#"{"box_length":-1.0}"#;
        let config = ViewerConfig::load(Some(file), lookup(&[])).unwrap();
        assert!(config.validate().is_err());

        let config = ViewerConfig::load(Some(file), lookup(&[(ENV_BOX, "2")])).unwrap();
        assert_eq!(config.box_length, 2.0);
        config.validate().unwrap();
    }
}
