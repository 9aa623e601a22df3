use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scene parameters: building geometry, sun position and ground sizing.
///
/// Lengths in meters, angles in degrees.
/// Serialized with the same camelCase names as the control panel fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneParameters {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Counter-clockwise building rotation, `[0, 360)`
    pub rotation: f64,
    /// Sun elevation above the horizon
    pub sun_altitude: f64,
    /// Sun bearing, clockwise from north, `[0, 360)`
    pub sun_azimuth: f64,
    pub grid_spacing: f64,
    /// Side of the square ground extent
    pub ground_size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SceneParameters {
    pub fn new() -> Self {
        Self {
            width: 24.,
            depth: 14.,
            height: 22.,
            rotation: 18.,
            sun_altitude: 45.,
            sun_azimuth: 135.,
            grid_spacing: 5.,
            ground_size: 140.,
            offset_x: 0.,
            offset_y: 0.,
        }
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Width => self.width,
            ParamKey::Depth => self.depth,
            ParamKey::Height => self.height,
            ParamKey::Rotation => self.rotation,
            ParamKey::SunAltitude => self.sun_altitude,
            ParamKey::SunAzimuth => self.sun_azimuth,
            ParamKey::GridSpacing => self.grid_spacing,
            ParamKey::GroundSize => self.ground_size,
            ParamKey::OffsetX => self.offset_x,
            ParamKey::OffsetY => self.offset_y,
        }
    }

    /// Writes a field as is. Range policy is applied by the `ParameterStore`.
    pub(crate) fn set_raw(&mut self, key: ParamKey, value: f64) {
        let field = match key {
            ParamKey::Width => &mut self.width,
            ParamKey::Depth => &mut self.depth,
            ParamKey::Height => &mut self.height,
            ParamKey::Rotation => &mut self.rotation,
            ParamKey::SunAltitude => &mut self.sun_altitude,
            ParamKey::SunAzimuth => &mut self.sun_azimuth,
            ParamKey::GridSpacing => &mut self.grid_spacing,
            ParamKey::GroundSize => &mut self.ground_size,
            ParamKey::OffsetX => &mut self.offset_x,
            ParamKey::OffsetY => &mut self.offset_y,
        };
        *field = value;
    }

    /// Footprint area, `width * depth` [m2].
    pub fn footprint_area(&self) -> f64 {
        self.width * self.depth
    }
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of the scene parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Width,
    Depth,
    Height,
    Rotation,
    SunAltitude,
    SunAzimuth,
    GridSpacing,
    GroundSize,
    OffsetX,
    OffsetY,
}

impl ParamKey {
    pub const ALL: [ParamKey; 10] = [
        ParamKey::Width,
        ParamKey::Depth,
        ParamKey::Height,
        ParamKey::Rotation,
        ParamKey::SunAltitude,
        ParamKey::SunAzimuth,
        ParamKey::GridSpacing,
        ParamKey::GroundSize,
        ParamKey::OffsetX,
        ParamKey::OffsetY,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParamKey::Width => "width",
            ParamKey::Depth => "depth",
            ParamKey::Height => "height",
            ParamKey::Rotation => "rotation",
            ParamKey::SunAltitude => "sunAltitude",
            ParamKey::SunAzimuth => "sunAzimuth",
            ParamKey::GridSpacing => "gridSpacing",
            ParamKey::GroundSize => "groundSize",
            ParamKey::OffsetX => "offsetX",
            ParamKey::OffsetY => "offsetY",
        }
    }

    /// Valid range and write policy of this parameter.
    pub fn range(&self) -> ParamRange {
        match self {
            ParamKey::Width | ParamKey::Depth => ParamRange::clamped(2., 120., 0.5),
            ParamKey::Height => ParamRange::clamped(1., 300., 0.5),
            ParamKey::Rotation | ParamKey::SunAzimuth => ParamRange::wrapped(0., 360., 1.),
            ParamKey::SunAltitude => ParamRange::clamped(1., 89.9, 0.1),
            ParamKey::GridSpacing => ParamRange::clamped(1., 50., 1.),
            ParamKey::GroundSize => ParamRange::clamped(40., 400., 10.),
            ParamKey::OffsetX | ParamKey::OffsetY => ParamRange::clamped(-100., 100., 0.5),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ParamKey {
    type Err = anyhow::Error;

    /// Accepts the camelCase names as well as snake_case spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        for key in ParamKey::ALL {
            if key.name().to_lowercase() == normalized {
                return Ok(key);
            }
        }
        bail!("Unknown scene parameter: {s}")
    }
}

/// Valid interval of a parameter and the step its values are snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Angles wrap around `[min, max)` instead of being clamped
    pub wraps: bool,
}

impl ParamRange {
    pub const fn clamped(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            wraps: false,
        }
    }

    pub const fn wrapped(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            wraps: true,
        }
    }

    /// Maps any finite value into this range, snapped to the step grid.
    pub fn apply(&self, value: f64) -> f64 {
        if self.wraps {
            let span = self.max - self.min;
            let wrapped = self.min + (value - self.min).rem_euclid(span);
            let snapped = self.snap(wrapped);
            // Snapping can land exactly on the upper bound, which is the lower one again
            if snapped >= self.max { self.min } else { snapped }
        } else {
            let clamped = value.clamp(self.min, self.max);
            self.snap(clamped).clamp(self.min, self.max)
        }
    }

    fn snap(&self, value: f64) -> f64 {
        let snapped = ((value - self.min) / self.step).round() * self.step + self.min;
        // Strip floating-point noise from the step multiplication
        (snapped * 1e4).round() / 1e4
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.wraps {
            value >= self.min && value < self.max
        } else {
            value >= self.min && value <= self.max
        }
    }
}
