//! CPU display surface.
//!
//! A fixed-size `u32` pixel buffer (`0x00RRGGBB`) that hooks draw into and the
//! runtime presents through `softbuffer`. Origin top-left, +X right, +Y down.

mod blit;
mod canvas;
mod color;

pub use blit::blit_scaled;
pub use canvas::Surface;
pub use color::Color;
