use super::params::{ParamKey, SceneParameters};
use anyhow::{Result, ensure};
use tracing::debug;

/// Owner of the current scene parameters.
///
/// Every write goes through the range policy of the parameter (clamp or wrap,
/// then snap to the step), so the held snapshot is always valid. Each accepted
/// write bumps `revision`, which a front end can use as its redraw trigger.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    params: SceneParameters,
    revision: u64,
}

impl ParameterStore {
    /// Creates a store holding the default parameters.
    pub fn new() -> Self {
        Self {
            params: SceneParameters::default(),
            revision: 0,
        }
    }

    /// Creates a store from arbitrary parameters, sanitizing every field.
    pub fn from_params(params: SceneParameters) -> Result<Self> {
        let mut store = Self::new();
        store.replace(params)?;
        Ok(store)
    }

    /// Immutable copy of the current parameters.
    pub fn snapshot(&self) -> SceneParameters {
        self.params
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        self.params.get(key)
    }

    /// Writes one parameter and returns the value actually stored.
    ///
    /// Non-finite values are rejected and leave the store untouched.
    pub fn set(&mut self, key: ParamKey, value: f64) -> Result<f64> {
        ensure!(value.is_finite(), "{key} must be finite, got {value}");
        let stored = key.range().apply(value);
        if stored != value {
            debug!(%key, requested = value, stored, "parameter adjusted to range");
        }
        self.params.set_raw(key, stored);
        self.revision += 1;
        Ok(stored)
    }

    /// Same as `set()` but looks the parameter up by name.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<f64> {
        let key: ParamKey = name.parse()?;
        self.set(key, value)
    }

    /// Replaces all parameters at once.
    ///
    /// All fields are validated before anything is written.
    pub fn replace(&mut self, params: SceneParameters) -> Result<()> {
        for key in ParamKey::ALL {
            let value = params.get(key);
            ensure!(value.is_finite(), "{key} must be finite, got {value}");
        }
        let mut sanitized = params;
        for key in ParamKey::ALL {
            sanitized.set_raw(key, key.range().apply(params.get(key)));
        }
        self.params = sanitized;
        self.revision += 1;
        Ok(())
    }

    /// Restores the default parameters.
    pub fn reset(&mut self) {
        self.params = SceneParameters::default();
        self.revision += 1;
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
