use crate::geom::point::Point;
use crate::vecutils::min_max;

/// Returns the (min, max) corners of the axis-aligned box holding all points `pts`.
///
/// `pts` must not be empty.
pub fn bounding_box(pts: &[Point]) -> (Point, Point) {
    let x: Vec<f64> = pts.iter().map(|v| v.x).collect();
    let y: Vec<f64> = pts.iter().map(|v| v.y).collect();
    let (xmin, xmax) = min_max(&x);
    let (ymin, ymax) = min_max(&y);

    (Point::new(xmin, ymin), Point::new(xmax, ymax))
}

/// Checks whether a point is inside the box `(pmin, pmax)` grown by `tol` on each side.
pub fn is_point_inside_bbox(ptest: Point, pmin: Point, pmax: Point, tol: f64) -> bool {
    ptest.x >= pmin.x - tol
        && ptest.x <= pmax.x + tol
        && ptest.y >= pmin.y - tol
        && ptest.y <= pmax.y + tol
}
