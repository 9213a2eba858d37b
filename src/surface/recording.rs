//! A rendering context that records calls instead of rasterizing.

use super::RenderContext;
use crate::draw::{Color, FontDescriptor};

/// One call made against a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    /// Pango description string of the font that was set
    Font(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Stroke,
    Fill,
    FillText { text: String, x: f64, y: f64 },
    ClearRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
}

/// Records every drawing call in order against a surface of fixed size.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the recorded calls and starts a fresh recording.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderContext for RecordingContext {
    fn surface_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.calls.push(DrawCall::Font(font.to_pango_string()));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRect(x, y, width, height));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::StrokeRect(x, y, width, height));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect(x, y, width, height));
    }
}
