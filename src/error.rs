//! Error types for strokekit operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in strokekit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A mesh index references a vertex that does not exist.
    #[error("Mesh index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u16,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A mesh index list does not form whole triangles.
    #[error("Mesh index count {index_count} is not a multiple of 3")]
    IncompleteTriangles {
        /// Number of indices in the mesh.
        index_count: usize,
    },
}
