//! Shadow geometry of a box-shaped building under parallel sun light.
//!
//! Conventions:
//! - World axes: +X east, +Y north.
//! - Building rotation: degrees, counter-clockwise.
//! - Solar azimuth: degrees from north, clockwise (0=N, 90=E, 180=S, 270=W).
//! - Solar altitude: degrees above horizon, clamped to the configured range.

use super::config::ShadowConfig;
use crate::geom::hull::convex_hull;
use crate::geom::rect::OrientedRect;
use crate::scene::params::SceneParameters;
use crate::{Point, Polygon, Vector};
use anyhow::Result;
use serde::Serialize;
use tracing::trace;

/// Everything derived from one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowGeometry {
    /// Building outline as a rotated rectangle
    pub building: OrientedRect,
    /// Building corners, counter-clockwise
    pub footprint: [Point; 4],
    /// Unit direction of the light (from the sun toward the ground)
    pub sun_direction: Vector,
    /// Displacement of the roof outline on the ground
    pub shadow_vector: Vector,
    /// Length of `shadow_vector` [m], capped
    pub shadow_length: f64,
}

impl ShadowGeometry {
    /// Footprint translated by the shadow vector.
    pub fn shifted_footprint(&self) -> [Point; 4] {
        self.footprint.map(|p| p + self.shadow_vector)
    }

    /// Footprint and its shifted copy, 8 points.
    pub fn candidate_points(&self) -> Vec<Point> {
        let mut pts = self.footprint.to_vec();
        pts.extend(self.shifted_footprint());
        pts
    }

    /// Shadow silhouette: convex hull of the footprint and its shifted copy.
    pub fn shadow_hull(&self) -> Vec<Point> {
        convex_hull(&self.candidate_points())
    }

    pub fn shadow_polygon(&self) -> Result<Polygon> {
        Polygon::new(self.shadow_hull())
    }

    /// Unit vector pointing from the ground toward the sun.
    pub fn toward_sun(&self) -> Vector {
        -self.sun_direction
    }
}

/// Direction the light travels for a sun at `azimuth_deg`.
///
/// Azimuth 0 (sun in the north) casts shadows toward -Y.
pub fn sun_direction(azimuth_deg: f64) -> Vector {
    -Vector::from_bearing(azimuth_deg)
}

/// Ground shadow length of an object of height `height`.
///
/// The altitude is clamped to `[min_altitude, max_altitude]`, so the result is
/// finite and non-negative. The length is capped at `length_cap_factor * ground_size`.
pub fn shadow_length(
    height: f64,
    altitude_deg: f64,
    ground_size: f64,
    config: &ShadowConfig,
) -> f64 {
    let altitude = altitude_deg.clamp(config.min_altitude, config.max_altitude);
    let length = height.max(0.) / altitude.to_radians().tan();
    length.min(config.length_cap(ground_size)).max(0.)
}

/// Computes footprint, sun direction and shadow vector for a parameter snapshot.
pub fn solve(params: &SceneParameters, config: &ShadowConfig) -> ShadowGeometry {
    let building = OrientedRect::new(
        Point::new(params.offset_x, params.offset_y),
        params.width,
        params.depth,
        params.rotation,
    );
    let footprint = building.corners();
    let sun_direction = sun_direction(params.sun_azimuth);
    let shadow_length = shadow_length(
        params.height,
        params.sun_altitude,
        params.ground_size,
        config,
    );
    let shadow_vector = sun_direction * shadow_length;

    trace!(
        shadow_length,
        dx = shadow_vector.dx,
        dy = shadow_vector.dy,
        "solved shadow geometry"
    );

    ShadowGeometry {
        building,
        footprint,
        sun_direction,
        shadow_vector,
        shadow_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecutils::almost_equal;

    fn reference_params() -> SceneParameters {
        SceneParameters {
            width: 24.,
            depth: 14.,
            height: 22.,
            rotation: 0.,
            sun_altitude: 45.,
            sun_azimuth: 180.,
            offset_x: 0.,
            offset_y: 0.,
            ..SceneParameters::default()
        }
    }

    #[test]
    fn test_reference_scene() {
        let g = solve(&reference_params(), &ShadowConfig::new());
        let xs: Vec<f64> = g.footprint.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = g.footprint.iter().map(|p| p.y).collect();
        assert!(almost_equal(&xs, &[-12., 12., 12., -12.], 1e-9));
        assert!(almost_equal(&ys, &[-7., -7., 7., 7.], 1e-9));
        assert!(g.sun_direction.is_close(&Vector::new(0., 1.)));
        assert!((g.shadow_length - 22.).abs() < 1e-9);
        assert!((g.shadow_vector.dx).abs() < 1e-9);
        assert!((g.shadow_vector.dy - 22.).abs() < 1e-9);
    }

    #[test]
    fn test_sun_direction_convention() {
        // Sun in the north casts shadow to the south
        assert!(sun_direction(0.).is_close(&Vector::new(0., -1.)));
        // Sun in the east casts shadow to the west
        assert!(sun_direction(90.).is_close(&Vector::new(-1., 0.)));
    }

    #[test]
    fn test_shadow_length_near_zenith() {
        let config = ShadowConfig::new();
        let len = shadow_length(50., 89.9, 140., &config);
        assert!((len - 50. * 0.1_f64.to_radians().tan()).abs() < 1e-9);
        assert!(len < 0.1);
        // Altitude above the clamp behaves like the clamp
        assert_eq!(shadow_length(50., 90., 140., &config), len);
    }

    #[test]
    fn test_shadow_length_capped() {
        let config = ShadowConfig::new();
        // Below the horizon and at the floor: long but capped
        assert_eq!(shadow_length(300., -10., 140., &config), 210.);
        assert_eq!(shadow_length(300., 1., 140., &config), 210.);
        let short = shadow_length(1., 1., 140., &config);
        assert!(short < 210. && short > 50.);
    }

    #[test]
    fn test_shadow_length_decreases_with_altitude() {
        let config = ShadowConfig::new();
        let mut prev = f64::INFINITY;
        for i in 0..=90 {
            let alt = 1. + i as f64 * (88.9 / 90.);
            let len = shadow_length(22., alt, 140., &config);
            assert!(len.is_finite() && len >= 0.);
            assert!(len <= prev);
            prev = len;
        }
    }

    #[test]
    fn test_hull_spans_shadow() {
        let g = solve(&reference_params(), &ShadowConfig::new());
        let hull = g.shadow_polygon().unwrap();
        // Collinear corners are pruned: the shadow is a plain rectangle
        assert_eq!(hull.len(), 4);
        let (pmin, pmax) = hull.bbox();
        assert!((pmin.y + 7.).abs() < 1e-9);
        assert!((pmax.y - 29.).abs() < 1e-9);
        assert!((hull.area() - 24. * 36.).abs() < 1e-6);
    }
}
