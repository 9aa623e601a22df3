use crate::Point;
use anyhow::{Result, ensure};

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width > 0. && height > 0. && width.is_finite() && height.is_finite(),
            "Viewport size must be positive, got {width} x {height}"
        );
        Ok(Self { width, height })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn center(&self) -> Point {
        Point::new(0.5 * self.width, 0.5 * self.height)
    }
}

/// Maps world meters to viewport pixels.
///
/// Uniform scale, world origin at the viewport centre, y axis flipped
/// (north is up on screen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldToViewport {
    pub center: Point,
    /// Pixels per meter
    pub scale: f64,
}

impl WorldToViewport {
    /// Fits the square ground extent, enlarged by `margin`, into the viewport.
    pub fn fit_ground(viewport: &Viewport, ground_size: f64, margin: f64) -> Result<Self> {
        ensure!(
            ground_size > 0. && margin > 0.,
            "Ground size and margin must be positive"
        );
        Ok(Self {
            center: viewport.center(),
            scale: viewport.width.min(viewport.height) / (ground_size * margin),
        })
    }

    pub fn to_viewport(&self, pt: Point) -> Point {
        Point::new(
            self.center.x + pt.x * self.scale,
            self.center.y - pt.y * self.scale,
        )
    }

    pub fn to_world(&self, px: Point) -> Point {
        Point::new(
            (px.x - self.center.x) / self.scale,
            (self.center.y - px.y) / self.scale,
        )
    }

    /// Converts a screen length to meters.
    pub fn px_to_meters(&self, px: f64) -> f64 {
        px / self.scale
    }
}
