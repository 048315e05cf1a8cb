/// Render configuration, fixed for the lifetime of a driver
use crate::error::ConfigError;
use crate::geometry::{MeshKind, MAX_VERTICES};
use crate::projection::ProjectionMode;
use crate::torus::TorusParams;
use crate::transform::AngleDeltas;

/// Largest model-space coordinate a mesh may reach. Scaled and rotated, it
/// stays well inside i32.
pub const MAX_MODEL_EXTENT: i32 = 1 << 14;

/// Everything the core needs to know before the first frame.
///
/// The defaults reproduce the handheld build: a 240x160 screen, 8 fractional
/// bits and 256 angle steps per turn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Fractional bits of the trig values, scale factor and clip parameter
    pub frac_bits: u32,
    /// Angle steps per full turn (power of two)
    pub angle_period: u32,
    pub viewer_distance: i32,
    /// Added to rotated depth before the perspective divide
    pub depth_offset: i32,
    pub cube_half_extent: i32,
    pub torus: TorusParams,
    pub deltas: AngleDeltas,
    pub initial_mesh: MeshKind,
    pub initial_camera: ProjectionMode,
}

impl RenderConfig {
    /// 12 fractional bits and 4096 angle steps, animated at the same speed as
    /// the default.
    pub fn high_precision() -> Self {
        Self {
            frac_bits: 12,
            angle_period: 4096,
            deltas: AngleDeltas {
                yaw: 16,
                pitch: 32,
                pulse: 16,
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=16).contains(&self.frac_bits) {
            return Err(ConfigError::FracBits(self.frac_bits));
        }
        if !self.angle_period.is_power_of_two() {
            return Err(ConfigError::PeriodNotPowerOfTwo(self.angle_period));
        }
        if self.angle_period < 4 {
            return Err(ConfigError::PeriodTooSmall(self.angle_period));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }
        if self.torus.major_segments == 0 || self.torus.minor_segments == 0 {
            return Err(ConfigError::TorusSegments {
                major: self.torus.major_segments,
                minor: self.torus.minor_segments,
            });
        }
        let vertices = self
            .torus
            .major_segments
            .checked_mul(self.torus.minor_segments);
        if !matches!(vertices, Some(n) if n as usize <= MAX_VERTICES) {
            return Err(ConfigError::TorusTooLarge {
                major: self.torus.major_segments,
                minor: self.torus.minor_segments,
            });
        }
        if self.viewer_distance <= 0 {
            return Err(ConfigError::ViewerDistance(self.viewer_distance));
        }
        if !(0..=MAX_MODEL_EXTENT).contains(&self.cube_half_extent) {
            return Err(ConfigError::ModelExtent {
                field: "cube_half_extent",
                value: self.cube_half_extent,
            });
        }
        let TorusParams {
            major_radius,
            minor_radius,
            ..
        } = self.torus;
        for (field, value) in [("major_radius", major_radius), ("minor_radius", minor_radius)] {
            if !(0..=MAX_MODEL_EXTENT).contains(&value) {
                return Err(ConfigError::ModelExtent { field, value });
            }
        }
        if major_radius + minor_radius > MAX_MODEL_EXTENT {
            return Err(ConfigError::ModelExtent {
                field: "major_radius + minor_radius",
                value: major_radius + minor_radius,
            });
        }
        Ok(())
    }

    pub fn unit(&self) -> i32 {
        crate::fixed::unit(self.frac_bits)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 160,
            frac_bits: 8,
            angle_period: 256,
            viewer_distance: 256,
            depth_offset: 120,
            cube_half_extent: 30,
            torus: TorusParams::default(),
            deltas: AngleDeltas::default(),
            initial_mesh: MeshKind::Cube,
            initial_camera: ProjectionMode::Perspective,
        }
    }
}
