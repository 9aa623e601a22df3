use crate::Point;
use crate::geom::bboxes::bounding_box;
use crate::geom::hull::convex_hull;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod containment;

/// Closed planar polygon. The closing edge (last -> first) is implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub pts: Vec<Point>,
}

impl Polygon {
    pub fn new(pts: Vec<Point>) -> Result<Self> {
        ensure!(
            pts.len() >= 3,
            "Polygon needs at least 3 points, got {}",
            pts.len()
        );
        ensure!(
            pts.iter().all(|p| p.is_finite()),
            "Polygon points must be finite"
        );
        Ok(Self { pts })
    }

    /// Creates the convex hull of a point set.
    pub fn convex_hull_of(pts: &[Point]) -> Result<Self> {
        Self::new(convex_hull(pts))
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Signed area (shoelace formula). Positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.pts.len();
        let mut sum = 0.;
        for i in 0..n {
            let a = self.pts[i];
            let b = self.pts[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        0.5 * sum
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns true if all consecutive edge pairs turn the same way.
    ///
    /// Turns smaller than `tol` (collinear) are ignored.
    pub fn is_convex(&self, tol: f64) -> bool {
        let n = self.pts.len();
        let mut sign = 0.;
        for i in 0..n {
            let a = self.pts[i];
            let b = self.pts[(i + 1) % n];
            let c = self.pts[(i + 2) % n];
            let turn = (b - a).cross(&(c - b));
            if turn.abs() <= tol {
                continue;
            }
            if sign == 0. {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }

    pub fn bbox(&self) -> (Point, Point) {
        bounding_box(&self.pts)
    }

    /// Checks whether the point lies inside this convex polygon.
    ///
    /// `tol` widens (positive) or shrinks (negative) the polygon by that distance.
    pub fn is_point_inside(&self, ptest: Point, tol: f64) -> bool {
        containment::is_point_inside_convex_polygon(ptest, &self.pts, tol)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(f, "Polygon[")?;
        for (i, p) in self.pts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.prec$}", p, prec = prec)?;
        }
        write!(f, "]")
    }
}
