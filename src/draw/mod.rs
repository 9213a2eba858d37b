//! Drawing primitives and the helpers behind them.
//!
//! This module defines the value types and pure layout math the
//! [`Screen`](crate::Screen) facade draws with:
//! - [`Rgba`] / [`Color`]: 8-bit API colors and their normalized backend form
//! - [`DrawSettings`]: resolved line, font, tessellation and palette settings
//! - [`geometry`]: tessellation tier lookup and circle vertices
//! - [`text`]: fixed-pitch line layout, word wrap and box alignment

pub mod color;
pub mod font;
pub mod geometry;
pub mod palette;
pub mod settings;
pub mod text;

// Re-export commonly used types at module level
pub use color::{Color, Rgba};
pub use font::FontDescriptor;
pub use geometry::{Tessellation, find_last_index};
pub use palette::{MapPalette, MapTerrain};
pub use settings::DrawSettings;
pub use text::{GlyphCell, HAlign, VAlign};
