//! Wu anti-aliased line rasterizer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Maximum coordinate delta accepted by the rasterizer.
///
/// Lines with a larger |dx| or |dy| are silently skipped. This is a
/// defensive clamp against pathological input such as uninitialized or
/// far-off-screen cursor coordinates.
pub const MAX_DELTA: f32 = 10_000.0;

/// A single plot operation: one pixel touched with fractional coverage.
///
/// Rendering the pixel with the stroke color's alpha multiplied by
/// `coverage` (and letting overlapping plots accumulate via standard alpha
/// compositing) approximates an anti-aliased line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    /// Pixel x coordinate.
    pub x: i32,
    /// Pixel y coordinate.
    pub y: i32,
    /// Coverage intensity in [0, 1].
    pub coverage: f32,
}

/// Receiver for plot operations emitted by the rasterizer.
pub trait PlotSink {
    /// Record one pixel plot with the given coverage intensity.
    fn plot(&mut self, x: i32, y: i32, coverage: f32);
}

impl PlotSink for Vec<Plot> {
    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        self.push(Plot { x, y, coverage });
    }
}

/// Adapter implementing [`PlotSink`] for an `FnMut(i32, i32, f32)` closure.
///
/// A blanket impl directly on closures would overlap with the `Vec<Plot>`
/// impl under coherence rules, so closures are wrapped explicitly:
///
/// ```
/// use strokekit::raster::{raster_line_aa, FnSink};
///
/// let mut touched = 0u32;
/// let mut sink = FnSink(|_x, _y, _coverage| touched += 1);
/// raster_line_aa(0.0, 0.0, 10.0, 0.0, 1, &mut sink);
/// assert!(touched > 0);
/// ```
pub struct FnSink<F>(
    /// The wrapped closure.
    pub F,
);

impl<F: FnMut(i32, i32, f32)> PlotSink for FnSink<F> {
    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        (self.0)(x, y, coverage);
    }
}

/// Rasterize an anti-aliased line using Wu's algorithm.
///
/// Emits paired plots straddling the ideal line at each step along the major
/// axis, with intensities split by the fractional distance from the ideal
/// position. `thickness` replicates each plot across that many parallel
/// 1-pixel offsets along the minor axis; values below 1 are treated as 1.
///
/// The routine never fails. A zero-length line degenerates to endpoint plots
/// whose coverage accumulates to full intensity at a single pixel. Lines
/// with a coordinate delta beyond [`MAX_DELTA`] are skipped entirely.
pub fn raster_line_aa<S: PlotSink + ?Sized>(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    thickness: u32,
    sink: &mut S,
) {
    if (x1 - x0).abs() > MAX_DELTA || (y1 - y0).abs() > MAX_DELTA {
        return;
    }

    let thickness = thickness.max(1) as i32;
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    // Transpose so the major axis is x, then normalize left-to-right.
    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    // dx can only be 0 here for a zero-length line (a vertical input is
    // transposed to horizontal above). Zero gradient anchors intery at the
    // endpoint scanline instead of propagating NaN.
    let gradient = if dx == 0.0 { 0.0 } else { dy / dx };

    // Emission undoes the transpose; minor-axis offsets thicken the line.
    let mut emit = |major: i32, minor: i32, coverage: f32| {
        for i in 0..thickness {
            if steep {
                sink.plot(minor + i, major, coverage);
            } else {
                sink.plot(major, minor + i, coverage);
            }
        }
    };

    // First endpoint.
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;

    emit(xpxl1, ypxl1, rfpart(yend) * xgap);
    emit(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    // First y-intersection for the interior loop.
    let mut intery = yend + gradient;

    // Second endpoint.
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    emit(xpxl2, ypxl2, rfpart(yend) * xgap);
    emit(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    // Interior: every integer x strictly between the endpoint pixels.
    for x in (xpxl1 + 1)..xpxl2 {
        let row = intery.floor() as i32;
        emit(x, row, rfpart(intery));
        emit(x, row + 1, fpart(intery));
        intery += gradient;
    }
}

/// Draw an anti-aliased line directly into a framebuffer.
///
/// Each plot blends `color` with its alpha scaled by the plot's coverage,
/// using the framebuffer's "over" compositing.
pub fn draw_line_aa(
    fb: &mut Framebuffer,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba,
    thickness: u32,
) {
    let mut sink = BlendSink { fb, color };
    raster_line_aa(x0, y0, x1, y1, thickness, &mut sink);
}

/// Sink that composites plots into a framebuffer with a fixed color.
struct BlendSink<'a> {
    fb: &'a mut Framebuffer,
    color: Rgba,
}

impl PlotSink for BlendSink<'_> {
    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        if x >= 0 && y >= 0 {
            let alpha = (f32::from(self.color.a) * coverage.clamp(0.0, 1.0)) as u8;
            self.fb
                .blend_pixel(x as u32, y as u32, self.color.with_alpha(alpha));
        }
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}
