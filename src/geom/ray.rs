//! Ray casting on the ground plane.
//!
//! This module provides a Ray struct and a slab (interval) intersection test
//! against rotated rectangles.

use crate::geom::rect::OrientedRect;
use crate::{Point, Vector};

/// A ray defined by an origin point and a unit direction vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Point,
    /// Direction vector (unit length)
    pub direction: Vector,
}

impl Ray {
    /// Creates a new ray from origin point and direction vector.
    ///
    /// The direction vector is automatically normalized.
    pub fn new(origin: Point, direction: Vector) -> Option<Self> {
        let normalized = direction.normalize().ok()?;
        Some(Self {
            origin,
            direction: normalized,
        })
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// point = origin + t * direction
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Computes the parametric interval `(t_min, t_max)` in which the line
    /// through this ray lies inside `rect`.
    ///
    /// The ray is moved into the rectangle's local frame, where the rectangle
    /// is the axis-aligned slab pair `|x| <= half_width`, `|y| <= half_depth`.
    /// For each axis whose direction component is below `parallel_eps` the
    /// origin must already lie within that slab, otherwise `None` is returned.
    /// The interval is not clamped to `t >= 0`, and it may be empty
    /// (`t_max < t_min`) when the line misses the rectangle.
    pub fn slab_interval(&self, rect: &OrientedRect, parallel_eps: f64) -> Option<(f64, f64)> {
        let o = rect.to_local(self.origin);
        let d = rect.to_local_vector(self.direction);

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for (origin, dir, half) in [(o.x, d.dx, rect.half_width), (o.y, d.dy, rect.half_depth)] {
            if dir.abs() < parallel_eps {
                if origin.abs() > half {
                    return None; // Parallel and outside the slab
                }
                continue;
            }
            let t1 = (-half - origin) / dir;
            let t2 = (half - origin) / dir;
            let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            t_min = t_min.max(near);
            t_max = t_max.min(far);
        }

        Some((t_min, t_max))
    }

    /// Checks whether the ray hits `rect` for some `t` in `[0, max_t]`.
    pub fn hits_rect_within(&self, rect: &OrientedRect, max_t: f64, parallel_eps: f64) -> bool {
        match self.slab_interval(rect, parallel_eps) {
            Some((t_min, t_max)) => t_max >= t_min && t_max >= 0. && t_min <= max_t,
            None => false,
        }
    }
}
