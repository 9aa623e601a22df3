/// Tuning of the shadow solver and classifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Lowest sun altitude used by the solver [deg].
    pub min_altitude: f64,
    /// Highest sun altitude used by the solver [deg].
    pub max_altitude: f64,
    /// Shadow length cap as a multiple of the ground size.
    /// Shared by the hull and the per-sample paths.
    pub length_cap_factor: f64,
    /// Ray direction components below this are treated as parallel to a slab.
    pub parallel_eps: f64,
    /// Distance within which points on a boundary count as inside [m].
    pub edge_tolerance: f64,
}

impl ShadowConfig {
    pub fn new() -> Self {
        Self {
            min_altitude: 1.0,
            max_altitude: 89.9,
            length_cap_factor: 1.5,
            parallel_eps: 1e-9,
            edge_tolerance: 1e-9,
        }
    }

    /// Maximum shadow length for a given ground size [m].
    pub fn length_cap(&self, ground_size: f64) -> f64 {
        self.length_cap_factor * ground_size
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ShadowConfig::new();
        assert_eq!(config.min_altitude, 1.0);
        assert_eq!(config.max_altitude, 89.9);
        assert_eq!(config.length_cap(140.), 210.);
        assert_eq!(ShadowConfig::default(), config);
    }
}
