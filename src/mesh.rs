//! Triangle mesh types.
//!
//! A [`Mesh`] is an ordered vertex list plus an ordered list of index triples
//! defining triangles, ready for submission to a triangle rasterizer drawing
//! from a 1x1 opaque texture (solid-color fill via vertex color, no texture
//! sampling).

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Texture coordinate of the opaque texel all solid-fill vertices sample.
///
/// Renderers are expected to bind a 1x1 opaque white source image; sampling
/// it at (1, 1) with clamping yields pure vertex color.
pub const SOLID_TEXEL: (f32, f32) = (1.0, 1.0);

/// A single mesh vertex: position, texture coordinate, normalized RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vertex {
    /// X position in destination coordinates.
    pub x: f32,
    /// Y position in destination coordinates.
    pub y: f32,
    /// U texture coordinate.
    pub u: f32,
    /// V texture coordinate.
    pub v: f32,
    /// RGBA color, each channel in [0, 1].
    pub color: [f32; 4],
}

impl Vertex {
    /// Create a solid-fill vertex at the given position.
    ///
    /// The texture coordinate is fixed at [`SOLID_TEXEL`].
    #[must_use]
    pub fn solid(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            x,
            y,
            u: SOLID_TEXEL.0,
            v: SOLID_TEXEL.1,
            color: color.to_normalized(),
        }
    }
}

/// A triangle mesh: vertices plus index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Ordered vertex list.
    pub vertices: Vec<Vertex>,
    /// Index triples. Each consecutive group of three defines one triangle.
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with reserved capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u16 {
        let idx = self.vertices.len() as u16;
        self.vertices.push(vertex);
        idx
    }

    /// Append one triangle as an index triple.
    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh contains no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Validate mesh invariants: indices form whole triangles and every
    /// index references an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteTriangles`] if the index count is not a
    /// multiple of 3, or [`Error::IndexOutOfBounds`] for a dangling index.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(Error::IncompleteTriangles {
                index_count: self.indices.len(),
            });
        }

        let vertex_count = self.vertices.len();
        for &index in &self.indices {
            if (index as usize) >= vertex_count {
                return Err(Error::IndexOutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_vertex() {
        let v = Vertex::solid(3.0, 4.0, Rgba::WHITE);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
        assert_eq!((v.u, v.v), SOLID_TEXEL);
        assert_eq!(v.color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_push_and_count() {
        let mut mesh = Mesh::new();
        let a = mesh.push_vertex(Vertex::solid(0.0, 0.0, Rgba::RED));
        let b = mesh.push_vertex(Vertex::solid(1.0, 0.0, Rgba::RED));
        let c = mesh.push_vertex(Vertex::solid(0.0, 1.0, Rgba::RED));
        mesh.push_triangle(a, b, c);

        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_validate_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(Vertex::solid(0.0, 0.0, Rgba::RED));
        mesh.push_triangle(0, 1, 2);

        assert!(matches!(
            mesh.validate(),
            Err(Error::IndexOutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_incomplete_triangles() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(Vertex::solid(0.0, 0.0, Rgba::RED));
        mesh.indices.push(0);

        assert!(matches!(
            mesh.validate(),
            Err(Error::IncompleteTriangles { index_count: 1 })
        ));
    }
}
