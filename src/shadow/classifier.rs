//! Ground / footprint / shadow classification of world points.
//!
//! Two interchangeable strategies answer the same question:
//! - [`HullClassifier`] builds the shadow polygon once and tests containment,
//! - [`SlabClassifier`] casts a ray toward the sun from every sample and tests
//!   it against the building box.
//!
//! Both give the footprint precedence over the shadow.

use super::config::ShadowConfig;
use super::solver::ShadowGeometry;
use crate::geom::polygon::containment::is_point_inside_convex_polygon;
use crate::geom::ray::Ray;
use crate::geom::rect::OrientedRect;
use crate::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Ground,
    Footprint,
    Shadow,
}

impl Classification {
    /// Single-character symbol used by text rasters.
    pub fn symbol(&self) -> char {
        match self {
            Classification::Ground => '.',
            Classification::Footprint => '#',
            Classification::Shadow => ':',
        }
    }
}

/// Capability shared by both shadow evaluation strategies.
pub trait ShadowClassifier: Sync {
    /// Human-readable identifier for logs.
    fn name(&self) -> &'static str;

    fn classify(&self, pt: Point) -> Classification;
}

/// Classifies against the explicit shadow polygon (convex hull).
pub struct HullClassifier {
    building: OrientedRect,
    hull: Vec<Point>,
    tol: f64,
}

impl HullClassifier {
    pub fn new(geometry: &ShadowGeometry, config: &ShadowConfig) -> Self {
        Self {
            building: geometry.building,
            hull: geometry.shadow_hull(),
            tol: config.edge_tolerance,
        }
    }

    pub fn hull(&self) -> &[Point] {
        &self.hull
    }
}

impl ShadowClassifier for HullClassifier {
    fn name(&self) -> &'static str {
        "hull"
    }

    fn classify(&self, pt: Point) -> Classification {
        if self.building.contains(pt, self.tol) {
            Classification::Footprint
        } else if is_point_inside_convex_polygon(pt, &self.hull, self.tol) {
            Classification::Shadow
        } else {
            Classification::Ground
        }
    }
}

/// Classifies every sample independently with a ray/box slab test.
pub struct SlabClassifier {
    geometry: ShadowGeometry,
    config: ShadowConfig,
}

impl SlabClassifier {
    pub fn new(geometry: &ShadowGeometry, config: &ShadowConfig) -> Self {
        Self {
            geometry: *geometry,
            config: *config,
        }
    }
}

impl ShadowClassifier for SlabClassifier {
    fn name(&self) -> &'static str {
        "slab"
    }

    fn classify(&self, pt: Point) -> Classification {
        classify_sample(pt, &self.geometry, &self.config)
    }
}

/// Per-sample kernel: pure function of the point and the solved geometry.
///
/// A point is shadowed when the ray from it toward the sun meets the building
/// within `shadow_length`.
pub fn classify_sample(
    pt: Point,
    geometry: &ShadowGeometry,
    config: &ShadowConfig,
) -> Classification {
    let building = &geometry.building;
    if building.contains(pt, config.edge_tolerance) {
        return Classification::Footprint;
    }
    let Some(ray) = Ray::new(pt, geometry.toward_sun()) else {
        return Classification::Ground;
    };
    if ray.hits_rect_within(building, geometry.shadow_length, config.parallel_eps) {
        Classification::Shadow
    } else {
        Classification::Ground
    }
}

/// Selects a classification strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Explicit convex polygon, built once
    #[default]
    Hull,
    /// Ray/box test per sample
    Slab,
}

impl Backend {
    pub fn classifier(
        &self,
        geometry: &ShadowGeometry,
        config: &ShadowConfig,
    ) -> Box<dyn ShadowClassifier> {
        match self {
            Backend::Hull => Box::new(HullClassifier::new(geometry, config)),
            Backend::Slab => Box::new(SlabClassifier::new(geometry, config)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Hull => write!(f, "hull"),
            Backend::Slab => write!(f, "slab"),
        }
    }
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "hull" | "polygon" | "cpu" => Ok(Backend::Hull),
            "slab" | "ray" | "gpu" => Ok(Backend::Slab),
            _ => anyhow::bail!("Unknown shadow backend: {s}"),
        }
    }
}
