use std::f64::consts::PI;

/// RGBA color tuple (red, green, blue, alpha) with values in 0.0..=1.0.
pub type Rgba = (f32, f32, f32, f32);

/// Styling and sizing of the 2D site drawing.
///
/// World sizes are in meters, screen sizes in viewport pixels.
pub struct ViewConfig {
    /// Ground extent is scaled to fit the viewport times this margin
    pub frame_margin: f64,
    /// Longest north axis [m]
    pub north_axis_max: f64,
    /// Sun arrow length [m]
    pub sun_arrow_length: f64,
    /// Arrow head side length [px]
    pub arrow_head_px: f64,
    /// Half-angle of the arrow head [rad]
    pub arrow_head_angle: f64,
    /// Label offset from the north axis tip [px]
    pub label_offset_px: (f32, f32),

    pub ground_fill: Rgba,
    pub ground_stroke: Rgba,
    pub ground_line_width: f32,
    pub grid_color: Rgba,
    pub grid_line_width: f32,
    pub axis_color: Rgba,
    pub axis_line_width: f32,
    pub label_color: Rgba,

    /// Shadow gradient color at the building
    pub shadow_color_near: Rgba,
    /// Shadow gradient color at the tip of the shadow vector
    pub shadow_color_far: Rgba,
    pub shadow_stroke: Rgba,
    pub shadow_line_width: f32,

    pub footprint_fill: Rgba,
    pub footprint_stroke: Rgba,
    pub footprint_line_width: f32,

    pub sun_color: Rgba,
    pub sun_line_width: f32,
}

impl ViewConfig {
    pub fn new() -> Self {
        Self {
            frame_margin: 1.1,
            north_axis_max: 12.,
            sun_arrow_length: 18.,
            arrow_head_px: 8.,
            arrow_head_angle: PI / 7.,
            label_offset_px: (6., 4.),

            ground_fill: (1.0, 1.0, 1.0, 0.02),
            ground_stroke: (1.0, 1.0, 1.0, 0.06),
            ground_line_width: 1.2,
            grid_color: (1.0, 1.0, 1.0, 0.06),
            grid_line_width: 1.0,
            axis_color: (1.0, 1.0, 1.0, 0.25),
            axis_line_width: 1.5,
            label_color: (1.0, 1.0, 1.0, 0.75),

            shadow_color_near: (0.31, 0.545, 1.0, 0.35),
            shadow_color_far: (0.31, 0.545, 1.0, 0.05),
            shadow_stroke: (0.31, 0.545, 1.0, 0.35),
            shadow_line_width: 1.5,

            footprint_fill: (0.655, 0.953, 0.816, 0.22),
            footprint_stroke: (0.655, 0.953, 0.816, 0.9),
            footprint_line_width: 2.0,

            sun_color: (1.0, 0.784, 0.525, 0.9),
            sun_line_width: 2.0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
