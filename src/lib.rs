//! Simplified immediate-mode drawing API over a Cairo surface.
//!
//! A [`Screen`] binds one surface and its drawing context to a fixed set of
//! drawing operations (lines, rectangles, tessellated circles, triangles,
//! fixed-pitch text and text boxes) plus color and dimension management.
//!
//! ```no_run
//! use screen_api::{Screen, ScreenOptions};
//!
//! let mut screen = Screen::new(ScreenOptions::new())?;
//! screen.set_color(100, 100, 200, Some(255));
//! screen.draw_line(0.0, 0.0, 200.0, 200.0);
//! screen.draw_text(1.0, 1.0, "Hello!");
//! # Ok::<(), screen_api::ScreenError>(())
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod screen;
pub mod surface;

pub use config::Config;
pub use error::{Result, ScreenError};
pub use screen::{Screen, ScreenOptions};
