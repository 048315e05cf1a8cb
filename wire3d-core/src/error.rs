//! Construction-time errors for configs and meshes
//!
//! The per-frame path has no error cases of its own; everything that could go
//! wrong is rejected here before the first frame is drawn.

/// Invalid [`RenderConfig`](crate::config::RenderConfig) values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("fractional bits must be in 1..=16, got {0}")]
    FracBits(u32),

    #[error("angle period must be a power of two, got {0}")]
    PeriodNotPowerOfTwo(u32),

    #[error("angle period must be at least 4, got {0}")]
    PeriodTooSmall(u32),

    #[error("screen dimensions must be non-zero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("torus needs at least one major and one minor segment, got {major}x{minor}")]
    TorusSegments { major: u32, minor: u32 },

    #[error("torus of {major}x{minor} segments exceeds 65536 vertices")]
    TorusTooLarge { major: u32, minor: u32 },

    #[error("viewer distance must be positive, got {0}")]
    ViewerDistance(i32),

    #[error("{field} must be in 0..=16384, got {value}")]
    ModelExtent { field: &'static str, value: i32 },
}

/// Invalid mesh data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("edge {edge} references vertex {index}, mesh has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        index: u16,
        vertex_count: usize,
    },

    #[error("mesh has {0} vertices, edges can address at most 65536")]
    TooManyVertices(usize),
}

/// Any error raised while setting up a renderer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid render config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid mesh: {0}")]
    Geometry(#[from] GeometryError),
}
