//! Visualizer settings.

use crate::error::EditError;

/// Grid size and obstacle-generation defaults for a [`Visualizer`](crate::Visualizer).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
    /// Barrier probability used by [`Visualizer::randomize_default`](crate::Visualizer::randomize_default).
    pub density: f64,
    /// Keep start and end when randomizing.
    pub protect_start_end: bool,
    /// Seed for reproducible obstacle layouts; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            density: 0.28,
            protect_start_end: true,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_protect_start_end(mut self, protect: bool) -> Self {
        self.protect_start_end = protect;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings without building anything.
    pub fn validate(&self) -> Result<(), EditError> {
        if !(1..=pathviz_core::Grid::MAX_SIZE).contains(&self.grid_size) {
            return Err(pathviz_core::GridError::InvalidSize(self.grid_size).into());
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(EditError::InvalidDensity(self.density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::GridError;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = VisualizerConfig::default();
        assert_eq!(cfg.grid_size, 50);
        assert_eq!(cfg.density, 0.28);
        assert!(cfg.protect_start_end);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn builder_and_validation() {
        let cfg = VisualizerConfig::default()
            .with_grid_size(0)
            .with_density(0.5)
            .with_seed(7);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.validate(), Err(EditError::Grid(GridError::InvalidSize(0))));

        let big = pathviz_core::Grid::MAX_SIZE + 1;
        let cfg = cfg.with_grid_size(big);
        assert_eq!(cfg.validate(), Err(EditError::Grid(GridError::InvalidSize(big))));

        let cfg = cfg.with_grid_size(10).with_density(1.01);
        assert_eq!(cfg.validate(), Err(EditError::InvalidDensity(1.01)));

        let cfg = cfg.with_density(1.0).with_protect_start_end(false);
        assert_eq!(cfg.validate(), Ok(()));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: VisualizerConfig = serde_json::from_str(r#"{"grid_size": 20, "seed": 3}"#).unwrap();
        assert_eq!(cfg.grid_size, 20);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.density, 0.28);
    }

    #[test]
    fn config_round_trip() {
        let cfg = VisualizerConfig::default().with_seed(11);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: VisualizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
