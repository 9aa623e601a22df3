use crate::Point;
use crate::geom::EPS;
use crate::geom::bboxes::{bounding_box, is_point_inside_bbox};

/// Checks if a point lies inside a convex polygon with vertices `pts`.
///
/// Works for both windings. The test point is compared against every edge
/// using the signed distance to the edge line. `tol > 0` accepts points up
/// to `tol` outside the boundary, `tol < 0` requires them to be at least
/// `-tol` inside.
///
/// Degenerate polygons (zero area) contain only the points within `tol` of
/// their edges.
pub fn is_point_inside_convex_polygon(ptest: Point, pts: &[Point], tol: f64) -> bool {
    if pts.is_empty() {
        return false;
    }
    let (pmin, pmax) = bounding_box(pts);
    if !is_point_inside_bbox(ptest, pmin, pmax, tol.max(0.)) {
        return false;
    }

    let orientation = winding_sign(pts);
    if orientation == 0. {
        return distance_to_boundary(ptest, pts) <= tol;
    }

    let n = pts.len();
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        let edge = b - a;
        let len = edge.length();
        if len < EPS {
            continue;
        }
        // Positive on the inner side of the edge
        let dist = orientation * edge.cross(&(ptest - a)) / len;
        if dist < -tol {
            return false;
        }
    }

    true
}

/// Shortest distance from a point to the polygon boundary.
pub fn distance_to_boundary(ptest: Point, pts: &[Point]) -> f64 {
    let n = pts.len();
    if n == 1 {
        return ptest.distance(&pts[0]);
    }
    (0..n)
        .map(|i| distance_to_segment(ptest, pts[i], pts[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

fn distance_to_segment(ptest: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.dot(&ab);
    if len2 < EPS * EPS {
        return ptest.distance(&a);
    }
    let t = ((ptest - a).dot(&ab) / len2).clamp(0., 1.);
    ptest.distance(&(a + ab * t))
}

/// +1 for counter-clockwise, -1 for clockwise, 0 for a degenerate polygon.
fn winding_sign(pts: &[Point]) -> f64 {
    let n = pts.len();
    let mut twice_area = 0.;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }
    if twice_area.abs() < EPS {
        0.
    } else {
        twice_area.signum()
    }
}
