/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

use crate::error::GeometryError;

/// A model-space vertex in integer units
pub type Vertex = Point3<i32>;

/// A line between two vertices of the same mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: u16,
    pub end: u16,
}

impl Edge {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn touches(&self, index: u16) -> bool {
        self.start == index || self.end == index
    }
}

/// Which solid is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshKind {
    #[default]
    Cube,
    Torus,
}

impl MeshKind {
    pub fn toggled(self) -> Self {
        match self {
            MeshKind::Cube => MeshKind::Torus,
            MeshKind::Torus => MeshKind::Cube,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Cube => "Cube",
            MeshKind::Torus => "Torus",
        }
    }
}

/// Unit cube corners; scaled by the half extent in [`Mesh::cube`]
#[rustfmt::skip]
pub const CUBE_CORNERS: [[i32; 3]; 8] = [
    [-1, -1, -1], [1, -1, -1], [1, 1, -1], [-1, 1, -1],
    [-1, -1,  1], [1, -1,  1], [1, 1,  1], [-1, 1,  1],
];

/// Back ring, front ring, then the four connectors
#[rustfmt::skip]
pub const CUBE_EDGES: [Edge; 12] = [
    Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 0),
    Edge::new(4, 5), Edge::new(5, 6), Edge::new(6, 7), Edge::new(7, 4),
    Edge::new(0, 4), Edge::new(1, 5), Edge::new(2, 6), Edge::new(3, 7),
];

/// Edges index vertices with `u16`
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// An immutable vertex list plus the edges between them
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Build a mesh, checking every edge index against the vertex count.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GeometryError> {
        if vertices.len() > MAX_VERTICES {
            return Err(GeometryError::TooManyVertices(vertices.len()));
        }
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index as usize >= vertices.len() {
                    return Err(GeometryError::EdgeOutOfRange {
                        edge: i,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    /// For generators that produce valid indices by construction.
    pub(crate) fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| (e.start as usize) < vertices.len() && (e.end as usize) < vertices.len()));
        Self { vertices, edges }
    }

    /// Axis-aligned cube centred on the origin
    pub fn cube(half_extent: i32) -> Self {
        let vertices = CUBE_CORNERS
            .iter()
            .map(|[x, y, z]| Vertex::new(x * half_extent, y * half_extent, z * half_extent))
            .collect();
        Self {
            vertices,
            edges: CUBE_EDGES.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube(30);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
        assert_eq!(cube.vertices()[0], Vertex::new(-30, -30, -30));
        assert_eq!(cube.vertices()[6], Vertex::new(30, 30, 30));
    }

    #[test]
    fn test_cube_edges_are_axis_aligned() {
        let cube = Mesh::cube(30);
        for edge in cube.edges() {
            let a = cube.vertices()[edge.start as usize];
            let b = cube.vertices()[edge.end as usize];
            let differing = (a - b).iter().filter(|c| **c != 0).count();
            assert_eq!(differing, 1, "{edge:?}");
            assert_eq!((a - b).abs().sum(), 60);
        }
    }

    #[test]
    fn test_cube_degree_three() {
        let cube = Mesh::cube(30);
        for v in 0..8u16 {
            assert_eq!(cube.edges().iter().filter(|e| e.touches(v)).count(), 3);
        }
    }

    #[test]
    fn test_new_rejects_dangling_edge() {
        let vertices = vec![Vertex::new(0, 0, 0), Vertex::new(1, 0, 0)];
        let err = Mesh::new(vertices, vec![Edge::new(0, 1), Edge::new(1, 2)]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::EdgeOutOfRange {
                edge: 1,
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_mesh_kind_toggle() {
        assert_eq!(MeshKind::Cube.toggled(), MeshKind::Torus);
        assert_eq!(MeshKind::Torus.toggled().toggled(), MeshKind::Torus);
    }
}
