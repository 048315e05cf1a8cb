/// Procedural torus generation
use crate::error::GeometryError;
use crate::fixed;
use crate::geometry::{Edge, Mesh, Vertex, MAX_VERTICES};
use crate::trig::TrigTable;

/// Shape of the generated torus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorusParams {
    /// Distance from the centre to the middle of the tube
    pub major_radius: i32,
    /// Radius of the tube
    pub minor_radius: i32,
    /// Rings around the centre
    pub major_segments: u32,
    /// Vertices around each ring
    pub minor_segments: u32,
}

impl TorusParams {
    pub fn vertex_count(&self) -> usize {
        self.major_segments as usize * self.minor_segments as usize
    }

    pub fn edge_count(&self) -> usize {
        self.vertex_count() * 2
    }

    fn index(&self, i: u32, j: u32) -> u16 {
        (i * self.minor_segments + j) as u16
    }
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: 50,
            minor_radius: 20,
            major_segments: 16,
            minor_segments: 8,
        }
    }
}

impl Mesh {
    /// Generate a torus around the z axis.
    ///
    /// Vertex `(i, j)` sits at index `i * minor_segments + j` and owns two
    /// edges: one to the next ring and one to the next vertex on its own ring.
    /// Both wrap, so the grid has no boundary. Grids with more vertices than
    /// a `u16` edge index can address are rejected.
    pub fn torus(params: &TorusParams, trig: &TrigTable) -> Result<Self, GeometryError> {
        if params.vertex_count() > MAX_VERTICES {
            return Err(GeometryError::TooManyVertices(params.vertex_count()));
        }

        let frac = trig.frac_bits();
        let period = trig.period();
        let TorusParams {
            major_radius,
            minor_radius,
            major_segments,
            minor_segments,
        } = *params;

        let mut vertices = Vec::with_capacity(params.vertex_count());
        for i in 0..major_segments {
            let u = (i as u64 * period as u64 / major_segments as u64) as u32;
            let (sin_u, cos_u) = (trig.sin(u), trig.cos(u));
            for j in 0..minor_segments {
                let v = (j as u64 * period as u64 / minor_segments as u64) as u32;
                let (sin_v, cos_v) = (trig.sin(v), trig.cos(v));

                let ring = major_radius + fixed::mul(minor_radius, cos_v, frac);
                vertices.push(Vertex::new(
                    fixed::mul(ring, cos_u, frac),
                    fixed::mul(ring, sin_u, frac),
                    fixed::mul(minor_radius, sin_v, frac),
                ));
            }
        }

        let mut edges = Vec::with_capacity(params.edge_count());
        for i in 0..major_segments {
            for j in 0..minor_segments {
                let current = params.index(i, j);
                edges.push(Edge::new(current, params.index((i + 1) % major_segments, j)));
                edges.push(Edge::new(current, params.index(i, (j + 1) % minor_segments)));
            }
        }

        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            major_radius,
            minor_radius,
            "generated torus"
        );

        Ok(Self::from_parts(vertices, edges))
    }
}
