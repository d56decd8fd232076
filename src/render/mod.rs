//! Software raster backend for projected frames.
//!
//! Everything here works on the screen-space output of
//! [`crate::engine::Engine::project`]; nothing in the projection pipeline
//! depends on it.

mod framebuffer;
pub mod raster;
mod renderer;

pub use framebuffer::{FrameBuffer, ViewRect};
pub use renderer::Renderer;
