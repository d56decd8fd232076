//! Error types for flightview.
//!
//! Errors only occur while setting things up: loading configuration, building
//! the scene, opening the window, writing screenshots. Projecting a frame
//! never fails; degenerate geometry simply produces no output.

use thiserror::Error;

/// Main error type for flightview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for flightview operations
pub type Result<T> = std::result::Result<T, Error>;
