//! Drawing-context abstraction and its implementations.
//!
//! [`RenderContext`] is the capability set the [`Screen`](crate::Screen) facade
//! draws through. It mirrors a browser-style 2D context: a current path built
//! with `begin_path`/`move_to`/`line_to`/`close_path`, separate stroke and fill
//! styles, and standalone rectangle and text operations.
//!
//! - [`CairoContext`]: rasterizes into a Cairo image surface, text via Pango
//! - [`RecordingContext`]: records every call, for inspecting draw sequences

pub mod raster;
pub mod recording;

pub use raster::CairoContext;
pub use recording::{DrawCall, RecordingContext};

use crate::draw::{Color, FontDescriptor};

/// Primitive operations and style state of a 2D drawing context.
///
/// Stroking and filling keep the current path; only `begin_path` discards it.
/// The rectangle operations draw independently of the current path.
pub trait RenderContext {
    /// Physical size of the bound surface in pixels.
    fn surface_size(&self) -> (i32, i32);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &FontDescriptor);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    /// Draws `text` with its baseline starting at `(x, y)` in the fill color.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Resets the pixels of the rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
