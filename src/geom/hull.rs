//! Convex hull of a planar point set (monotone chain).

use crate::Point;

/// Returns the convex hull of `pts` as a counter-clockwise polygon.
///
/// Collinear points on the hull boundary are dropped, only the extremes are kept.
/// Duplicated input points are allowed. With 3 or fewer points the input is
/// returned unchanged.
pub fn convex_hull(pts: &[Point]) -> Vec<Point> {
    if pts.len() <= 3 {
        return pts.to_vec();
    }

    let mut sorted = pts.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut lower = half_hull(sorted.iter());
    let mut upper = half_hull(sorted.iter().rev());

    // Last point of each chain is the first point of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);

    lower
}

/// Builds one chain of the hull, keeping only strict left turns.
fn half_hull<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut half: Vec<Point> = Vec::new();
    for &pt in pts {
        while half.len() >= 2 {
            let last = half[half.len() - 1];
            let before_last = half[half.len() - 2];
            if (last - before_last).cross(&(pt - last)) <= 0. {
                half.pop();
            } else {
                break;
            }
        }
        half.push(pt);
    }
    half
}
