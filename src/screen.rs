//! The drawing facade: one surface, one context, shared style state.

use crate::config::{Dimensions, DrawSettingsOverride};
use crate::draw::geometry::circle_vertices;
use crate::draw::text::{self, HAlign, TextBox, VAlign};
use crate::draw::{DrawSettings, MapTerrain, Rgba};
use crate::error::Result;
use crate::surface::{CairoContext, RenderContext};
use cairo::ImageSurface;
use log::{debug, trace};
use std::path::Path;

/// Construction options for [`Screen::new`].
///
/// Everything is optional: with no surface and no dimensions a 380x240
/// surface is created, and unset drawing settings keep their defaults.
#[derive(Debug, Default)]
pub struct ScreenOptions {
    surface: Option<ImageSurface>,
    dimensions: Option<Dimensions>,
    report_dimensions: Option<Dimensions>,
    draw_settings: DrawSettingsOverride,
}

impl ScreenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw onto an existing surface instead of creating one.
    pub fn surface(mut self, surface: ImageSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Size of the surface to create when none is supplied.
    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Logical size returned by [`Screen::width`] and [`Screen::height`].
    pub fn report_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.report_dimensions = Some(dimensions);
        self
    }

    pub fn draw_settings(mut self, overrides: DrawSettingsOverride) -> Self {
        self.draw_settings = overrides;
        self
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Stroke,
    Fill,
}

/// Immediate-mode drawing API bound to a single surface.
///
/// Every drawing call goes straight to the context using the current color
/// and the settings fixed at construction. Nothing is retained.
pub struct Screen<C: RenderContext = CairoContext> {
    ctx: C,
    settings: DrawSettings,
    report_dimensions: Option<Dimensions>,
    color: Rgba,
}

impl Screen<CairoContext> {
    /// Binds to the supplied surface, or creates a new one.
    ///
    /// # Errors
    /// - [`ScreenError::SurfaceCreation`](crate::ScreenError::SurfaceCreation)
    ///   if a new surface cannot be allocated
    /// - [`ScreenError::ContextUnavailable`](crate::ScreenError::ContextUnavailable)
    ///   if no drawing context can be acquired from the surface
    pub fn new(options: ScreenOptions) -> Result<Self> {
        let ScreenOptions {
            surface,
            dimensions,
            report_dimensions,
            draw_settings,
        } = options;

        let ctx = match surface {
            Some(surface) => CairoContext::new(surface)?,
            None => {
                let size = dimensions.unwrap_or_default();
                CairoContext::create(size.width, size.height)?
            }
        };

        Ok(Self::with_context(
            ctx,
            DrawSettings::merged(&draw_settings),
            report_dimensions,
        ))
    }

    /// Binds to the PNG image at `path`; `options.surface` is ignored.
    ///
    /// # Errors
    /// [`ScreenError::MissingTarget`](crate::ScreenError::MissingTarget) if the
    /// file does not exist, plus everything [`Screen::new`] can return.
    pub fn open_png(path: &Path, options: ScreenOptions) -> Result<Self> {
        let surface = CairoContext::from_png(path)?.into_surface();
        Self::new(options.surface(surface))
    }

    pub fn surface(&self) -> &ImageSurface {
        self.ctx.surface()
    }

    pub fn cairo(&self) -> &cairo::Context {
        self.ctx.cairo()
    }

    pub fn write_png(&self, path: &Path) -> Result<()> {
        self.ctx.write_png(path)
    }

    /// Consumes the screen, returning the surface it drew on.
    pub fn into_surface(self) -> ImageSurface {
        self.ctx.into_surface()
    }
}

impl<C: RenderContext> Screen<C> {
    /// Wraps an already acquired context.
    ///
    /// Applies the font, line width and default color from `settings`.
    pub fn with_context(
        mut ctx: C,
        settings: DrawSettings,
        report_dimensions: Option<Dimensions>,
    ) -> Self {
        let font = settings.font();
        ctx.set_font(&font);
        ctx.set_line_width(settings.line_width);

        let (width, height) = ctx.surface_size();
        debug!(
            "Screen bound to {}x{} surface (reported {:?}), font '{}', line width {}",
            width,
            height,
            report_dimensions,
            font.to_css_string(),
            settings.line_width
        );

        let color = settings.default_color;
        let mut screen = Self {
            ctx,
            settings,
            report_dimensions,
            color,
        };
        screen.apply_color(color);
        screen
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Dimensions
    // ------------------------------------------------------------------

    /// Reported width if one was configured, otherwise the surface width.
    pub fn width(&self) -> i32 {
        self.report_dimensions
            .map(|d| d.width)
            .filter(|w| *w != 0)
            .unwrap_or_else(|| self.ctx.surface_size().0)
    }

    /// Reported height if one was configured, otherwise the surface height.
    pub fn height(&self) -> i32 {
        self.report_dimensions
            .map(|d| d.height)
            .filter(|h| *h != 0)
            .unwrap_or_else(|| self.ctx.surface_size().1)
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// Sets the stroke and fill color for all following drawing calls.
    ///
    /// Alpha uses the 0-255 scale and defaults to opaque.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.apply_color(Rgba::from_channels(r, g, b, a));
    }

    fn apply_color(&mut self, color: Rgba) {
        self.color = color;
        let backend = color.to_color();
        self.ctx.set_stroke_color(backend);
        self.ctx.set_fill_color(backend);
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Current color as an `rgba(r, g, b, a)` string, alpha in 0-1.
    pub fn color_string(&self) -> String {
        self.color.to_rgba_string()
    }

    /// Stores a palette color for `terrain`. Nothing is drawn.
    pub fn set_map_color(&mut self, terrain: MapTerrain, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.settings
            .map_colors
            .set(terrain, Rgba::from_channels(r, g, b, a));
    }

    pub fn map_color(&self, terrain: MapTerrain) -> Option<Rgba> {
        self.settings.map_colors.get(terrain)
    }

    pub fn set_map_color_grass(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Grass, r, g, b, a);
    }

    pub fn set_map_color_land(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Land, r, g, b, a);
    }

    pub fn set_map_color_ocean(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Ocean, r, g, b, a);
    }

    pub fn set_map_color_sand(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Sand, r, g, b, a);
    }

    pub fn set_map_color_shallows(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Shallows, r, g, b, a);
    }

    pub fn set_map_color_snow(&mut self, r: u8, g: u8, b: u8, a: Option<u8>) {
        self.set_map_color(MapTerrain::Snow, r, g, b, a);
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    /// Clears the reported area back to transparent.
    pub fn draw_clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    pub fn draw_rect_f(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.circle(x, y, radius, Paint::Stroke);
    }

    pub fn draw_circle_f(&mut self, x: f64, y: f64, radius: f64) {
        self.circle(x, y, radius, Paint::Fill);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint) {
        let segments = self.settings.circle.segments_for_radius(radius);
        let vertices = circle_vertices(x, y, radius, segments);
        self.polygon(&vertices, paint);
    }

    pub fn draw_triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.polygon(&[(x1, y1), (x2, y2), (x3, y3)], Paint::Stroke);
    }

    pub fn draw_triangle_f(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.polygon(&[(x1, y1), (x2, y2), (x3, y3)], Paint::Fill);
    }

    fn polygon(&mut self, vertices: &[(f64, f64)], paint: Paint) {
        let Some(&(x0, y0)) = vertices.first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        for &(x, y) in &vertices[1..] {
            self.ctx.line_to(x, y);
        }
        self.ctx.close_path();

        match paint {
            Paint::Stroke => self.ctx.stroke(),
            Paint::Fill => self.ctx.fill(),
        }
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Draws upper-cased text, one line per `\n`, first baseline at
    /// `y + font_size`.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        let lines = text::layout_lines(
            x,
            y,
            text,
            self.settings.font_char_dimensions,
            self.settings.font_size,
        );
        for line in lines {
            self.ctx.fill_text(&line.text, line.x, line.y);
        }
    }

    /// Draws upper-cased, word-wrapped text aligned inside a box.
    ///
    /// Runs of whitespace inside a line, including tabs and leading spaces,
    /// collapse to a single space; only `\n` forces a break.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_box(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: &str,
        h_align: HAlign,
        v_align: VAlign,
    ) {
        let bounds = TextBox {
            x,
            y,
            width,
            height,
        };
        let lines = text::layout_text_box(
            bounds,
            text,
            h_align,
            v_align,
            self.settings.font_char_dimensions,
            self.settings.font_size,
        );
        for line in lines {
            self.ctx.fill_text(&line.text, line.x, line.y);
        }
    }

    /// Map rendering hook. Draws nothing; the palette is only held.
    pub fn draw_map(&self, x: f64, y: f64, zoom: f64) {
        trace!("draw_map({x}, {y}, {zoom}) is a no-op");
    }
}
