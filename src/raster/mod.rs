//! Anti-aliased line rasterization.
//!
//! Implements Xiaolin Wu's line algorithm, adapted for integer stroke
//! thickness. The rasterizer is a pure function emitting `(pixel, coverage)`
//! plot operations into a caller-supplied [`PlotSink`]; compositing those
//! plots onto a pixel buffer is the caller's responsibility (or use
//! [`draw_line_aa`] to blend directly into a [`crate::framebuffer::Framebuffer`]).
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod line;

pub use line::{draw_line_aa, raster_line_aa, FnSink, Plot, PlotSink, MAX_DELTA};
