use crate::Point;
use ndarray as nd;

/// Packs points into an `(n, 2)` array, one point per row.
pub fn points_to_array(points: &[Point]) -> nd::Array2<f64> {
    let mut arr = nd::Array2::from_elem((points.len(), 2), 0.);

    for (i, p) in points.iter().enumerate() {
        arr[[i, 0]] = p.x;
        arr[[i, 1]] = p.y;
    }

    arr
}

pub fn array_to_points(arr: nd::Array2<f64>) -> Vec<Point> {
    arr.rows()
        .into_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect()
}
