/// Camera and projection utilities
use nalgebra::{Point2, Point3};

use crate::config::RenderConfig;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }
}

/// A vertex after projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedPoint {
    Visible(Point2<i32>),
    /// Depth was not positive after the offset; edges touching it are dropped
    BehindViewer,
}

impl ProjectedPoint {
    pub fn visible(self) -> Option<Point2<i32>> {
        match self {
            ProjectedPoint::Visible(p) => Some(p),
            ProjectedPoint::BehindViewer => None,
        }
    }
}

/// Camera configuration for projecting rotated vertices to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    pub mode: ProjectionMode,
    pub viewer_distance: i32,
    pub depth_offset: i32,
    pub half_width: i32,
    pub half_height: i32,
    pub frac_bits: u32,
}

impl Camera {
    pub fn new(config: &RenderConfig, mode: ProjectionMode) -> Self {
        Self {
            mode,
            viewer_distance: config.viewer_distance,
            depth_offset: config.depth_offset,
            half_width: (config.width / 2) as i32,
            half_height: (config.height / 2) as i32,
            frac_bits: config.frac_bits,
        }
    }

    /// Project a rotated point to screen space
    pub fn project(&self, point: &Point3<i32>) -> ProjectedPoint {
        match self.mode {
            ProjectionMode::Perspective => {
                let z = point.z as i64 + self.depth_offset as i64;
                if z <= 0 {
                    return ProjectedPoint::BehindViewer;
                }
                let factor = ((self.viewer_distance as i64) << self.frac_bits) / z;
                let x = ((point.x as i64 * factor) >> self.frac_bits) + self.half_width as i64;
                let y = ((point.y as i64 * factor) >> self.frac_bits) + self.half_height as i64;
                ProjectedPoint::Visible(Point2::new(saturate(x), saturate(y)))
            }
            ProjectionMode::Orthographic => ProjectedPoint::Visible(Point2::new(
                point.x + self.half_width,
                point.y + self.half_height,
            )),
        }
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
