//! Rotated rectangle on the ground plane.

use crate::geom::rotation::{rotate_points_around_origin, wrap_degrees};
use crate::{Point, Vector};
use serde::Serialize;

/// Rectangle of `2 * half_width` by `2 * half_depth` centred at `center`
/// and rotated counter-clockwise by `rotation` degrees.
///
/// The local frame has its origin at `center` and its axes along the
/// unrotated width (x) and depth (y) directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientedRect {
    pub center: Point,
    pub half_width: f64,
    pub half_depth: f64,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
    #[serde(skip)]
    sin: f64,
    #[serde(skip)]
    cos: f64,
}

impl OrientedRect {
    pub fn new(center: Point, width: f64, depth: f64, rotation: f64) -> Self {
        let rotation = wrap_degrees(rotation);
        let (sin, cos) = rotation.to_radians().sin_cos();
        Self {
            center,
            half_width: 0.5 * width,
            half_depth: 0.5 * depth,
            rotation,
            sin,
            cos,
        }
    }

    pub fn width(&self) -> f64 {
        2. * self.half_width
    }

    pub fn depth(&self) -> f64 {
        2. * self.half_depth
    }

    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }

    /// World-space corners, counter-clockwise, starting from the local (-w/2, -d/2) corner.
    pub fn corners(&self) -> [Point; 4] {
        let (hw, hd) = (self.half_width, self.half_depth);
        let local = [
            Point::new(-hw, -hd),
            Point::new(hw, -hd),
            Point::new(hw, hd),
            Point::new(-hw, hd),
        ];
        let rotated = rotate_points_around_origin(&local, self.rotation.to_radians());
        let offset = Vector::from_a_point(self.center);
        [
            rotated[0] + offset,
            rotated[1] + offset,
            rotated[2] + offset,
            rotated[3] + offset,
        ]
    }

    /// Transforms a world point into the local (unrotated, centred) frame.
    pub fn to_local(&self, pt: Point) -> Point {
        let v = self.to_local_vector(pt - self.center);
        Point::new(v.dx, v.dy)
    }

    /// Applies the inverse rotation to a world-space direction.
    pub fn to_local_vector(&self, v: Vector) -> Vector {
        Vector::new(
            v.dx * self.cos + v.dy * self.sin,
            -v.dx * self.sin + v.dy * self.cos,
        )
    }

    /// Checks whether a world point is inside the rectangle.
    ///
    /// `tol` grows (positive) or shrinks (negative) the half-extents.
    pub fn contains(&self, pt: Point, tol: f64) -> bool {
        let local = self.to_local(pt);
        local.x.abs() <= self.half_width + tol && local.y.abs() <= self.half_depth + tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_axis_aligned() {
        let rect = OrientedRect::new(Point::new(0., 0.), 24., 14., 0.);
        let c = rect.corners();
        assert!(c[0].is_close(&Point::new(-12., -7.)));
        assert!(c[1].is_close(&Point::new(12., -7.)));
        assert!(c[2].is_close(&Point::new(12., 7.)));
        assert!(c[3].is_close(&Point::new(-12., 7.)));
        assert_eq!(rect.area(), 24. * 14.);
    }

    #[test]
    fn test_corners_rotated_and_offset() {
        let rect = OrientedRect::new(Point::new(5., -3.), 4., 2., 90.);
        let c = rect.corners();
        // (-2, -1) rotated by 90 deg is (1, -2)
        assert!(c[0].is_close_tol(&Point::new(6., -5.), 1e-9));
        assert!(c[2].is_close_tol(&Point::new(4., -1.), 1e-9));
    }

    #[test]
    fn test_to_local_inverts_rotation() {
        let rect = OrientedRect::new(Point::new(1., 2.), 10., 4., 30.);
        for corner in rect.corners() {
            let local = rect.to_local(corner);
            assert!((local.x.abs() - 5.).abs() < 1e-9);
            assert!((local.y.abs() - 2.).abs() < 1e-9);
        }
        let v = rect.to_local_vector(Vector::from_bearing(60.));
        // Bearing 60 is 30 deg counter-clockwise from east, i.e. the local +x axis
        assert!(v.is_close(&Vector::new(1., 0.)));
    }

    #[test]
    fn test_contains() {
        let rect = OrientedRect::new(Point::new(0., 0.), 4., 2., 45.);
        assert!(rect.contains(Point::new(0., 0.), 0.));
        assert!(rect.contains(Point::new(1., 1.), 0.));
        assert!(!rect.contains(Point::new(1.5, -1.5), 0.));
        assert!(!rect.contains(Point::new(3., 0.), 0.));
    }
}
