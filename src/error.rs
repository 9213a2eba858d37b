//! Error types for surface binding and context acquisition.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while binding a [`Screen`](crate::Screen) to its surface.
///
/// Drawing operations themselves never fail; every variant here is fatal to
/// construction or to an explicit import/export of the surface.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("target surface not found: {}", .0.display())]
    MissingTarget(PathBuf),

    #[error("failed to get 2d context for surface: {0}")]
    ContextUnavailable(#[source] cairo::Error),

    #[error("failed to create {width}x{height} surface: {source}")]
    SurfaceCreation {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("PNG transfer failed for {}: {message}", .path.display())]
    Png { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ScreenError>;
