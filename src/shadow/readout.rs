use super::solver::ShadowGeometry;
use crate::scene::params::SceneParameters;
use serde::Serialize;
use std::fmt;

/// Numeric readouts shown next to the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readout {
    /// [m]
    pub shadow_length: f64,
    /// [m2]
    pub footprint_area: f64,
    /// [deg]
    pub sun_azimuth: f64,
    /// [deg]
    pub sun_altitude: f64,
}

impl Readout {
    pub fn new(params: &SceneParameters, geometry: &ShadowGeometry) -> Self {
        Self {
            shadow_length: geometry.shadow_length,
            footprint_area: params.footprint_area(),
            sun_azimuth: params.sun_azimuth,
            sun_altitude: params.sun_altitude,
        }
    }

    /// E.g. `22.0 m`
    pub fn shadow_length_text(&self) -> String {
        format!("{:.1} m", self.shadow_length)
    }

    /// E.g. `336.0 m²`
    pub fn footprint_area_text(&self) -> String {
        format!("{:.1} m²", self.footprint_area)
    }

    /// E.g. `Az 135° • Alt 45°`
    pub fn sun_vector_text(&self) -> String {
        // Round half away from zero before printing whole degrees
        format!(
            "Az {:.0}° • Alt {:.0}°",
            self.sun_azimuth.round(),
            self.sun_altitude.round()
        )
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shadow length:  {}", self.shadow_length_text())?;
        writeln!(f, "Footprint area: {}", self.footprint_area_text())?;
        write!(f, "Sun vector:     {}", self.sun_vector_text())
    }
}
