//! Backend-neutral description of one frame of the site drawing.
//!
//! The plan lists primitives in draw order. Coordinates are world meters
//! until `RenderPlan::to_viewport()` maps them to pixels.

use super::config::{Rgba, ViewConfig};
use super::viewport::WorldToViewport;
use crate::geom::IsClose;
use crate::scene::params::SceneParameters;
use crate::shadow::readout::Readout;
use crate::shadow::solver::ShadowGeometry;
use crate::{Point, Vector};
use serde::Serialize;

/// What a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layer {
    Ground,
    Grid,
    NorthAxis,
    Shadow,
    Footprint,
    SunArrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgba,
    /// [px]
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fill {
    Solid { color: Rgba },
    /// Linear gradient from `from` (color `start`) to `to` (color `end`)
    LinearGradient {
        from: Point,
        to: Point,
        start: Rgba,
        end: Rgba,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    /// Closed polygon
    Polygon {
        layer: Layer,
        points: Vec<Point>,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    /// Independent line segments
    Lines {
        layer: Layer,
        segments: Vec<(Point, Point)>,
        stroke: Stroke,
    },
    /// Text anchored at `at`, shifted by `offset_px` on screen
    Label {
        layer: Layer,
        text: String,
        at: Point,
        offset_px: (f32, f32),
        color: Rgba,
    },
}

impl Primitive {
    pub fn layer(&self) -> Layer {
        match self {
            Primitive::Polygon { layer, .. }
            | Primitive::Lines { layer, .. }
            | Primitive::Label { layer, .. } => *layer,
        }
    }

    fn map_points(&self, f: &impl Fn(Point) -> Point) -> Self {
        match self {
            Primitive::Polygon {
                layer,
                points,
                fill,
                stroke,
            } => Primitive::Polygon {
                layer: *layer,
                points: points.iter().map(|p| f(*p)).collect(),
                fill: fill.as_ref().map(|fill| match fill {
                    Fill::Solid { color } => Fill::Solid { color: *color },
                    Fill::LinearGradient {
                        from,
                        to,
                        start,
                        end,
                    } => Fill::LinearGradient {
                        from: f(*from),
                        to: f(*to),
                        start: *start,
                        end: *end,
                    },
                }),
                stroke: *stroke,
            },
            Primitive::Lines {
                layer,
                segments,
                stroke,
            } => Primitive::Lines {
                layer: *layer,
                segments: segments.iter().map(|(a, b)| (f(*a), f(*b))).collect(),
                stroke: *stroke,
            },
            Primitive::Label {
                layer,
                text,
                at,
                offset_px,
                color,
            } => Primitive::Label {
                layer: *layer,
                text: text.clone(),
                at: f(*at),
                offset_px: *offset_px,
                color: *color,
            },
        }
    }
}

/// One frame: primitives in draw order plus the numeric readouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub primitives: Vec<Primitive>,
    pub readout: Readout,
}

impl RenderPlan {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.layer() == layer)
    }

    /// Returns a copy with every coordinate in viewport pixels.
    pub fn to_viewport(&self, mapping: &WorldToViewport) -> Self {
        let f = |p: Point| mapping.to_viewport(p);
        Self {
            primitives: self.primitives.iter().map(|p| p.map_points(&f)).collect(),
            readout: self.readout,
        }
    }
}

/// Builds the drawing of one parameter snapshot.
///
/// `mapping` is needed only for sizes given in pixels (the arrow head).
pub fn build_plan(
    params: &SceneParameters,
    geometry: &ShadowGeometry,
    mapping: &WorldToViewport,
    config: &ViewConfig,
) -> RenderPlan {
    let half = 0.5 * params.ground_size;
    let center = geometry.building.center;

    let mut primitives = vec![
        Primitive::Polygon {
            layer: Layer::Ground,
            points: vec![
                Point::new(-half, -half),
                Point::new(half, -half),
                Point::new(half, half),
                Point::new(-half, half),
            ],
            fill: Some(Fill::Solid {
                color: config.ground_fill,
            }),
            stroke: Some(Stroke {
                color: config.ground_stroke,
                width: config.ground_line_width,
            }),
        },
        Primitive::Lines {
            layer: Layer::Grid,
            segments: grid_segments(half, params.grid_spacing),
            stroke: Stroke {
                color: config.grid_color,
                width: config.grid_line_width,
            },
        },
    ];

    let axis_tip = Point::new(0., half.min(config.north_axis_max));
    primitives.push(Primitive::Lines {
        layer: Layer::NorthAxis,
        segments: vec![(Point::origin(), axis_tip)],
        stroke: Stroke {
            color: config.axis_color,
            width: config.axis_line_width,
        },
    });
    primitives.push(Primitive::Label {
        layer: Layer::NorthAxis,
        text: "N".to_string(),
        at: axis_tip,
        offset_px: config.label_offset_px,
        color: config.label_color,
    });

    primitives.push(Primitive::Polygon {
        layer: Layer::Shadow,
        points: geometry.shadow_hull(),
        fill: Some(Fill::LinearGradient {
            from: center,
            to: center + geometry.shadow_vector,
            start: config.shadow_color_near,
            end: config.shadow_color_far,
        }),
        stroke: Some(Stroke {
            color: config.shadow_stroke,
            width: config.shadow_line_width,
        }),
    });

    primitives.push(Primitive::Polygon {
        layer: Layer::Footprint,
        points: geometry.footprint.to_vec(),
        fill: Some(Fill::Solid {
            color: config.footprint_fill,
        }),
        stroke: Some(Stroke {
            color: config.footprint_stroke,
            width: config.footprint_line_width,
        }),
    });

    primitives.extend(sun_arrow(center, geometry, mapping, config));

    RenderPlan {
        primitives,
        readout: Readout::new(params, geometry),
    }
}

/// Vertical and horizontal grid lines every `spacing` from `-half` to `half`.
fn grid_segments(half: f64, spacing: f64) -> Vec<(Point, Point)> {
    if spacing <= 0. || half <= 0. {
        return Vec::new();
    }
    // Small slack so that a line landing exactly on `half` is kept
    let n = ((2. * half) / spacing + 1e-9).floor() as usize;
    let mut segments = Vec::with_capacity(2 * (n + 1));
    for i in 0..=n {
        let g = -half + i as f64 * spacing;
        segments.push((Point::new(g, half), Point::new(g, -half)));
        segments.push((Point::new(-half, g), Point::new(half, g)));
    }
    segments
}

/// Arrow from the building centre toward the sun, with a filled head.
fn sun_arrow(
    center: Point,
    geometry: &ShadowGeometry,
    mapping: &WorldToViewport,
    config: &ViewConfig,
) -> Vec<Primitive> {
    let length = if geometry.shadow_length.is_close(0.) {
        0.
    } else {
        config.sun_arrow_length
    };
    let toward_sun = geometry.toward_sun();
    let tip = center + toward_sun * length;

    let stroke = Stroke {
        color: config.sun_color,
        width: config.sun_line_width,
    };
    let mut arrow = vec![Primitive::Lines {
        layer: Layer::SunArrow,
        segments: vec![(center, tip)],
        stroke,
    }];
    if length == 0. {
        return arrow;
    }

    // Head sides point from the tip back toward the centre
    let back = -toward_sun * mapping.px_to_meters(config.arrow_head_px);
    let (sin, cos) = config.arrow_head_angle.sin_cos();
    let side = |s: f64| tip + Vector::new(back.dx * cos - back.dy * s, back.dx * s + back.dy * cos);
    arrow.push(Primitive::Polygon {
        layer: Layer::SunArrow,
        points: vec![tip, side(sin), side(-sin)],
        fill: Some(Fill::Solid {
            color: config.sun_color,
        }),
        stroke: None,
    });
    arrow
}
