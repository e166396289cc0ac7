//! Frame timing.
//!
//! One `FrameClock` per loop. `tick()` is called once per iteration, after
//! input dispatch and before update hooks, and yields the frame's `FrameTime`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, DEFAULT_MAX_RATE};
