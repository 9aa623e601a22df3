use crate::Point;
use crate::geom::IsClose;
use crate::geom::point::convert::{array_to_points, points_to_array};
use ndarray as nd;

/// Calculate the 2D rotation matrix for angle `phi` (radians, counter-clockwise).
///
/// ```text
/// R = | cos(phi)  -sin(phi) |
///     | sin(phi)   cos(phi) |
/// ```
pub fn rotation_matrix(phi: f64) -> nd::Array2<f64> {
    let (sin, cos) = phi.sin_cos();
    nd::arr2(&[[cos, -sin], [sin, cos]])
}

/// Rotate points using the rotation matrix `rot`.
///
/// Points are stored as rows, so the product is `P * R^T`.
pub fn rotate_points(pts: &[Point], rot: &nd::ArrayView2<f64>) -> Vec<Point> {
    let pts = points_to_array(pts);
    let pts = pts.dot(&rot.t());

    array_to_points(pts)
}

/// Rotate points around the origin by `phi` radians, counter-clockwise.
pub fn rotate_points_around_origin(pts: &[Point], phi: f64) -> Vec<Point> {
    if phi.abs().is_close(0.) {
        // No need to rotate
        return pts.to_vec();
    }
    let rot = rotation_matrix(phi);

    rotate_points(pts, &rot.view())
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.);
    // rem_euclid() can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360. { 0. } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rotate_points_around_origin() {
        let p0 = Point::new(1.0, 0.0);
        let p1 = Point::new(0.0, 1.0);
        let p2 = Point::new(0.0, 0.0);

        let rotated_points = rotate_points_around_origin(&[p0, p1, p2], PI / 2.);

        assert!(rotated_points[0].is_close(&Point::new(0.0, 1.0)));
        assert!(rotated_points[1].is_close(&Point::new(-1.0, 0.0)));
        assert!(rotated_points[2].is_close(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_full_turn_is_identity() {
        let pts = vec![Point::new(3.0, -2.0), Point::new(-7.5, 4.0)];
        let rotated = rotate_points_around_origin(&pts, 2. * PI);
        for (a, b) in pts.iter().zip(rotated.iter()) {
            assert!(a.is_close_tol(b, 1e-9));
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.), 0.);
        assert_eq!(wrap_degrees(360.), 0.);
        assert_eq!(wrap_degrees(370.), 10.);
        assert_eq!(wrap_degrees(-90.), 270.);
        assert!(wrap_degrees(-1e-20) < 360.);
    }
}
