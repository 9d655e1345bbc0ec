//! # Strokekit
//!
//! Anti-aliased stroke rasterization and circle tessellation primitives for
//! 2D rendering.
//!
//! Strokekit provides two leaf numeric routines and the value types around
//! them:
//!
//! - **Line rasterizer** ([`raster::raster_line_aa`]): produces an
//!   anti-aliased, stroked line between two points as a stream of
//!   `(pixel, coverage)` plot operations using Wu's algorithm, adapted for
//!   integer stroke thickness.
//! - **Circle tessellator** ([`tessellate::tessellate_circle`]): produces a
//!   triangle mesh approximating a stroked (annulus) and/or filled circle
//!   using incremental rotation rather than per-vertex trigonometry.
//!
//! Both routines are pure functions over their inputs: no I/O, no shared
//! state, fresh output buffers per call. They may be invoked concurrently on
//! independent inputs.
//!
//! ## Quick Start
//!
//! ```
//! use strokekit::prelude::*;
//!
//! // Rasterize an anti-aliased line into a plot buffer
//! let mut plots: Vec<Plot> = Vec::new();
//! raster_line_aa(0.0, 0.0, 10.0, 4.0, 1, &mut plots);
//!
//! // Or composite it straight into a framebuffer
//! let mut fb = Framebuffer::new(64, 64).unwrap();
//! fb.clear(Rgba::WHITE);
//! draw_line_aa(&mut fb, 2.0, 2.0, 60.0, 30.0, Rgba::BLACK, 2);
//!
//! // Tessellate a stroked circle into a triangle mesh
//! let stroke = Stroke::new(Rgba::BLACK, 2.0);
//! let circle = tessellate_circle(Point::new(50.0, 50.0), 10.0, Some(stroke), None);
//! assert!(circle.ring.is_some());
//! ```
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel compositing.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles, strokes).
pub mod geometry;

/// Triangle mesh types (vertices, index triples).
pub mod mesh;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Anti-aliased line rasterization.
pub mod raster;

/// Triangle mesh generation for circles and quads.
pub mod tessellate;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for strokekit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use strokekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point, Rect, Stroke};
    pub use crate::mesh::{Mesh, Vertex};
    pub use crate::raster::{draw_line_aa, raster_line_aa, FnSink, Plot, PlotSink};
    pub use crate::tessellate::{
        line_quad, rect_quad, segment_count, tessellate_circle, CircleMesh,
    };
}
