/// Per-frame animation state and the fixed-point vertex transform
use nalgebra::Point3;

use crate::fixed;
use crate::geometry::Vertex;
use crate::trig::TrigTable;

/// Angle steps added every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleDeltas {
    pub yaw: u32,
    pub pitch: u32,
    pub pulse: u32,
}

impl Default for AngleDeltas {
    fn default() -> Self {
        Self {
            yaw: 1,
            pitch: 2,
            pulse: 1,
        }
    }
}

/// Quantized animation angles, each in `[0, period)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    /// Rotation about the vertical axis
    pub yaw: u32,
    /// Rotation about the horizontal axis
    pub pitch: u32,
    /// Phase of the scale pulsation
    pub pulse: u32,
}

impl AnimationState {
    pub fn new(yaw: u32, pitch: u32, pulse: u32) -> Self {
        Self { yaw, pitch, pulse }
    }

    /// Advance every angle by its delta, wrapping at `period`.
    pub fn advance(&mut self, deltas: &AngleDeltas, period: u32) {
        let mask = period - 1;
        self.yaw = self.yaw.wrapping_add(deltas.yaw) & mask;
        self.pitch = self.pitch.wrapping_add(deltas.pitch) & mask;
        self.pulse = self.pulse.wrapping_add(deltas.pulse) & mask;
    }
}

/// Scalars for one frame, looked up once and applied to every vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub scale: i32,
    pub sin_yaw: i32,
    pub cos_yaw: i32,
    pub sin_pitch: i32,
    pub cos_pitch: i32,
    frac_bits: u32,
}

impl Transform {
    /// The scale pulses between zero and one unit around half a unit.
    pub fn for_frame(state: &AnimationState, trig: &TrigTable) -> Self {
        Self {
            scale: trig.unit() / 2 + (trig.sin(state.pulse) >> 1),
            sin_yaw: trig.sin(state.yaw),
            cos_yaw: trig.cos(state.yaw),
            sin_pitch: trig.sin(state.pitch),
            cos_pitch: trig.cos(state.pitch),
            frac_bits: trig.frac_bits(),
        }
    }

    /// Scale, then yaw, then pitch.
    pub fn apply(&self, vertex: &Vertex) -> Point3<i32> {
        let frac = self.frac_bits;

        let x = fixed::mul(vertex.x, self.scale, frac);
        let y = fixed::mul(vertex.y, self.scale, frac);
        let z = fixed::mul(vertex.z, self.scale, frac);

        // Yaw mixes x and z
        let yawed_x = fixed::mul_sub(x, self.cos_yaw, z, self.sin_yaw, frac);
        let yawed_z = fixed::mul_add(x, self.sin_yaw, z, self.cos_yaw, frac);

        // Pitch mixes y and the yawed z
        let pitched_y = fixed::mul_sub(y, self.cos_pitch, yawed_z, self.sin_pitch, frac);
        let pitched_z = fixed::mul_add(y, self.sin_pitch, yawed_z, self.cos_pitch, frac);

        Point3::new(yawed_x, pitched_y, pitched_z)
    }
}
