//! Triangle mesh generation for circles and quads.
//!
//! Produces [`crate::mesh::Mesh`] values suitable for submission to a
//! triangle rasterizer with a 1x1 opaque texture source. Circles are
//! approximated with incremental rotation (tangential/radial factors)
//! instead of per-vertex trigonometry; lines and rectangles become
//! two-triangle quads.

mod circle;
mod quad;

pub use circle::{segment_count, tessellate_circle, CircleMesh, MAX_SEGMENTS, MIN_SEGMENTS};
pub use quad::{line_quad, rect_quad};
