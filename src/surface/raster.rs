//! Cairo-backed rendering context.

use super::RenderContext;
use crate::draw::{Color, FontDescriptor};
use crate::error::{Result, ScreenError};
use cairo::{Format, ImageSurface};
use log::debug;
use std::fs::File;
use std::path::Path;

/// A Cairo image surface together with the drawing context acquired from it.
///
/// Cairo has a single source pattern, so the stroke and fill colors are kept
/// here and applied right before each stroke or fill.
pub struct CairoContext {
    surface: ImageSurface,
    ctx: cairo::Context,
    stroke: Color,
    fill: Color,
    font: pango::FontDescription,
}

impl CairoContext {
    /// Binds to an existing surface.
    ///
    /// # Errors
    /// Returns [`ScreenError::ContextUnavailable`] if Cairo cannot create a
    /// context for the surface (e.g. the surface is already in an error state).
    pub fn new(surface: ImageSurface) -> Result<Self> {
        let ctx = cairo::Context::new(&surface).map_err(ScreenError::ContextUnavailable)?;
        let black = Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        };
        Ok(Self {
            surface,
            ctx,
            stroke: black,
            fill: black,
            font: pango::FontDescription::new(),
        })
    }

    /// Creates a new transparent ARGB surface of the given size and binds to it.
    pub fn create(width: i32, height: i32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width, height).map_err(|source| {
            ScreenError::SurfaceCreation {
                width,
                height,
                source,
            }
        })?;
        debug!("Created {}x{} surface", width, height);
        Self::new(surface)
    }

    /// Loads a PNG file as the target surface.
    ///
    /// # Errors
    /// - [`ScreenError::MissingTarget`] if nothing exists at `path`
    /// - [`ScreenError::Png`] if the file cannot be read or decoded
    pub fn from_png(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScreenError::MissingTarget(path.to_path_buf()));
        }

        let png_error = |message: String| ScreenError::Png {
            path: path.to_path_buf(),
            message,
        };
        let mut file = File::open(path).map_err(|e| png_error(e.to_string()))?;
        let surface =
            ImageSurface::create_from_png(&mut file).map_err(|e| png_error(e.to_string()))?;

        debug!(
            "Loaded {}x{} target from {}",
            surface.width(),
            surface.height(),
            path.display()
        );
        Self::new(surface)
    }

    /// Writes the current surface contents to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let png_error = |message: String| ScreenError::Png {
            path: path.to_path_buf(),
            message,
        };
        self.surface.flush();
        let mut file = File::create(path).map_err(|e| png_error(e.to_string()))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|e| png_error(e.to_string()))?;
        debug!("Wrote surface to {}", path.display());
        Ok(())
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn cairo(&self) -> &cairo::Context {
        &self.ctx
    }

    /// Releases the context and hands back sole ownership of the surface,
    /// so its pixel data can be borrowed.
    pub fn into_surface(self) -> ImageSurface {
        let Self { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }

    fn apply_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl RenderContext for CairoContext {
    fn surface_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.font = pango::FontDescription::from_string(&font.to_pango_string());
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.apply_source(self.stroke);
        let _ = self.ctx.stroke_preserve();
    }

    fn fill(&mut self) {
        self.apply_source(self.fill);
        let _ = self.ctx.fill_preserve();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }

        // Save context state to prevent settings from leaking to other drawing operations
        self.ctx.save().ok();

        let layout = pangocairo::functions::create_layout(&self.ctx);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);

        // Pango positions layouts by their top-left corner, callers give a baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;

        self.apply_source(self.fill);
        self.ctx.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        self.ctx.restore().ok();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
        self.ctx.restore().ok();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.apply_source(self.stroke);
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.apply_source(self.fill);
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
    }
}
