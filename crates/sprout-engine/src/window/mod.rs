//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single window, presents the display
//! surface through `softbuffer`, and feeds a `HookHost` once per iteration.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
