/// Wire3D Core Library - fixed-point wireframe rendering
///
/// This library provides the rendering core: a quantized sine table, cube and
/// torus meshes, the per-frame scale/rotate/project transform, viewport
/// clipping, Bresenham rasterization into a double-buffered indexed-color
/// framebuffer, and a frame driver that talks to a display through a small
/// port trait.

pub mod clip;
pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod fixed;
pub mod framebuffer;
pub mod geometry;
pub mod palette;
pub mod projection;
pub mod torus;
pub mod transform;
pub mod trig;

// Re-export commonly used types
pub use clip::{Clip, Outcode, Segment, Viewport};
pub use config::RenderConfig;
pub use display::{Buttons, DisplayPort, ScanlineSource, SimulatedDisplay};
pub use driver::{FrameDriver, FrameStats, Selection};
pub use error::{ConfigError, Error, GeometryError};
pub use framebuffer::Framebuffer;
pub use geometry::{Edge, Mesh, MeshKind, Vertex};
pub use palette::{Palette, PaletteIndex};
pub use projection::{Camera, ProjectedPoint, ProjectionMode};
pub use torus::TorusParams;
pub use transform::{AngleDeltas, AnimationState, Transform};
pub use trig::TrigTable;
