pub mod bboxes;
pub mod hull;
pub mod point;
pub mod polygon;
pub mod ray;
pub mod rect;
pub mod rotation;
pub mod vector;

/// Geometric precision
pub const EPS: f64 = 1e-10;

/// Approximate equality for scalars.
pub trait IsClose {
    fn is_close(&self, other: f64) -> bool;
}

impl IsClose for f64 {
    fn is_close(&self, other: f64) -> bool {
        (self - other).abs() < EPS
    }
}
