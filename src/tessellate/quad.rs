//! Two-triangle quad meshes for stroked lines and filled rectangles.

use std::f32::consts::FRAC_PI_2;

use crate::color::Rgba;
use crate::geometry::{Line, Rect, Stroke};
use crate::mesh::{Mesh, Vertex};

/// Shared quad index pattern: two triangles over four vertices.
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 1, 2, 3];

/// Build a stroked line segment as a two-triangle quad.
///
/// The four vertices are the endpoints offset by half the stroke width
/// along the segment normal. A zero-width stroke or coincident endpoints
/// produce a degenerate (zero-area) mesh, which rasterizes to nothing.
#[must_use]
pub fn line_quad(line: Line, stroke: Stroke) -> Mesh {
    let (p0, p1) = (line.start, line.end);
    let normal_angle = (p1.y - p0.y).atan2(p1.x - p0.x) + FRAC_PI_2;
    let nx = normal_angle.cos() * stroke.width / 2.0;
    let ny = normal_angle.sin() * stroke.width / 2.0;

    let mut mesh = Mesh::with_capacity(4, 6);
    mesh.push_vertex(Vertex::solid(p0.x - nx, p0.y - ny, stroke.color));
    mesh.push_vertex(Vertex::solid(p0.x + nx, p0.y + ny, stroke.color));
    mesh.push_vertex(Vertex::solid(p1.x - nx, p1.y - ny, stroke.color));
    mesh.push_vertex(Vertex::solid(p1.x + nx, p1.y + ny, stroke.color));
    mesh.indices.extend_from_slice(&QUAD_INDICES);
    mesh
}

/// Build a filled rectangle as a two-triangle quad.
///
/// Vertex order: bottom-left, top-left, top-right, bottom-right.
#[must_use]
pub fn rect_quad(rect: Rect, color: Rgba) -> Mesh {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

    let mut mesh = Mesh::with_capacity(4, 6);
    mesh.push_vertex(Vertex::solid(x0, y1, color));
    mesh.push_vertex(Vertex::solid(x0, y0, color));
    mesh.push_vertex(Vertex::solid(x1, y0, color));
    mesh.push_vertex(Vertex::solid(x1, y1, color));
    mesh.indices.extend_from_slice(&QUAD_INDICES);
    mesh
}
